use scraper::ElementRef;
use scraper::node::Text;

use crate::parsers::walker::{self, Visit, Visitor};

/// Collects raw image sources from `img` elements
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageVisitor;

impl ImageVisitor {
    /// Source attribute of an `img`, preferring `src` over lazy-load `node-src`
    fn source<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
        let value = element.value();
        value.attr("src").or_else(|| value.attr("node-src"))
    }
}

impl Visitor for ImageVisitor {
    type Output = String;

    fn visit_element(&self, element: ElementRef<'_>) -> Visit<String> {
        if element.value().name() != "img" {
            return Visit::Descend;
        }

        match Self::source(&element) {
            Some(source) if !source.starts_with("data:") => Visit::Emit(source.to_string()),
            // Missing source or inline data URI
            _ => Visit::Skip,
        }
    }

    fn visit_text(&self, _text: &Text) -> Option<String> {
        None
    }
}

/// Extracts raw image references from a subtree, in document order
pub fn extract_images(root: ElementRef<'_>) -> Vec<String> {
    let images = walker::walk(root, &ImageVisitor);
    ::log::debug!("Image parser found {} images", images.len());
    images
}
