use crate::error::{ExtractError, RequiredNode};
use crate::parsers::{Document, extract_images, extract_seo, extract_texts};

const ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>How we bake bread</title>
  <meta name="viewport" content="width=device-width">
  <meta name="description" content="Our sourdough process, step by step.">
  <link rel="stylesheet" href="/site.css">
  <script src="/app.js"></script>
</head>
<body>
  <nav><a href="/">Home</a> <a href="/recipes">Recipes and more</a></nav>
  <article>
    <h1>How we bake bread</h1>
    <img src="/img/loaf.jpg" alt="A loaf">
    <p>Start the levain the night before baking.</p>
    <style>.caption { color: gray }</style>
    <p>Mix, rest, fold and shape the dough.</p>
    <img src="data:image/svg+xml;base64,PHN2Zz4=">
    <img node-src="https://cdn.example.com/crumb.webp">
  </article>
  <script>window.dataLayer = window.dataLayer || [];</script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_article() {
        let doc = Document::parse(ARTICLE);
        let html = doc.html().unwrap();
        let body = doc.body().unwrap();

        let seo = extract_seo(html, "/blog/bread").unwrap();
        assert_eq!(seo.title, "How we bake bread");
        assert_eq!(seo.description, "Our sourdough process, step by step.");
        assert_eq!(seo.path, "/blog/bread");

        assert_eq!(
            extract_texts(body),
            vec![
                "Recipes and more",
                "How we bake bread",
                "Start the levain the night before baking.",
                "Mix, rest, fold and shape the dough.",
            ]
        );

        assert_eq!(
            extract_images(body),
            vec!["/img/loaf.jpg", "https://cdn.example.com/crumb.webp"]
        );
    }

    #[test]
    fn test_parser_always_provides_html_and_body() {
        let doc = Document::parse("just some text");
        assert!(doc.html().is_ok());
        assert!(doc.body().is_ok());
    }

    #[test]
    fn test_frameset_document_has_no_body() {
        let doc = Document::parse(
            "<html><head><title>Frames</title></head><frameset><frame src=\"a.html\"></frameset></html>",
        );
        assert!(doc.html().is_ok());
        assert_eq!(
            doc.body().unwrap_err(),
            ExtractError::MissingNode(RequiredNode::Body)
        );
    }
}
