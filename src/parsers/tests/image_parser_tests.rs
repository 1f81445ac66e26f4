use super::document_with_body;
use crate::parsers::images::extract_images;

#[cfg(test)]
mod tests {
    use super::*;

    fn images_in(body_html: &str) -> Vec<String> {
        let doc = document_with_body(body_html);
        extract_images(doc.body().unwrap())
    }

    #[test]
    fn test_inline_data_uri_is_skipped() {
        assert!(images_in(r#"<img src="data:image/png;base64,AAAA">"#).is_empty());
    }

    #[test]
    fn test_single_image_is_a_one_element_sequence() {
        assert_eq!(images_in(r#"<img src="a.jpg">"#), vec!["a.jpg"]);
    }

    #[test]
    fn test_node_src_fallback() {
        assert_eq!(images_in(r#"<img node-src="b.png">"#), vec!["b.png"]);
    }

    #[test]
    fn test_src_preferred_over_node_src() {
        // Attribute order does not matter, src always wins
        assert_eq!(
            images_in(r#"<img node-src="lazy.png" src="eager.png">"#),
            vec!["eager.png"]
        );
    }

    #[test]
    fn test_data_src_is_not_followed_by_node_src() {
        assert!(images_in(r#"<img src="data:image/gif;base64,R0" node-src="b.png">"#).is_empty());
    }

    #[test]
    fn test_images_without_source_or_non_img_tags() {
        let images = images_in(
            r#"<img alt="nothing"><picture><source src="s.webp"></picture><video src="v.mp4"></video>"#,
        );
        assert!(images.is_empty());
    }

    #[test]
    fn test_document_order_across_nesting() {
        let images = images_in(
            r#"
            <header><img src="/logo.svg"></header>
            <main>
              <article>
                <p>Text <img src="//cdn.example.com/inline.png"></p>
                <figure><img src="https://img.example.org/hero.jpg?w=800"></figure>
              </article>
            </main>
            <footer><img src="badge.gif"></footer>
            "#,
        );

        assert_eq!(
            images,
            vec![
                "/logo.svg",
                "//cdn.example.com/inline.png",
                "https://img.example.org/hero.jpg?w=800",
                "badge.gif",
            ]
        );
    }

    #[test]
    fn test_raw_value_is_kept_verbatim() {
        assert_eq!(
            images_in(r#"<img src="  spaced name.JPG ">"#),
            vec!["  spaced name.JPG "]
        );
    }
}
