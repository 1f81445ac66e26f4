use super::document_with_body;
use crate::parsers::walker::{Visit, Visitor, walk};
use scraper::ElementRef;
use scraper::node::Text;

/// Records every element and text node it sees, in visit order
struct TraceVisitor;

impl Visitor for TraceVisitor {
    type Output = String;

    fn visit_element(&self, element: ElementRef<'_>) -> Visit<String> {
        match element.value().name() {
            "em" => Visit::Emit("<em>".to_string()),
            "aside" => Visit::Skip,
            _ => Visit::Descend,
        }
    }

    fn visit_text(&self, text: &Text) -> Option<String> {
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_order_document_order() {
        let doc = document_with_body(
            "<div>one<p>two<span>three</span></p>four</div><p>five</p><!-- comment -->",
        );
        let body = doc.body().unwrap();

        assert_eq!(walk(body, &TraceVisitor), ["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn test_emit_replaces_subtree_and_skip_prunes_it() {
        let doc = document_with_body(
            "<p>before<em>inner text</em>after</p><aside>hidden<p>also hidden</p></aside>end",
        );
        let body = doc.body().unwrap();

        assert_eq!(walk(body, &TraceVisitor), ["before", "<em>", "after", "end"]);
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 5_000;
        let html = format!(
            "{}deepest{}",
            "<div>".repeat(depth),
            "</div>".repeat(depth)
        );
        let doc = document_with_body(&html);
        let body = doc.body().unwrap();

        assert_eq!(walk(body, &TraceVisitor), ["deepest"]);
    }
}
