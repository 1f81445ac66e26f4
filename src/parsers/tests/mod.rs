mod image_parser_tests;
mod integration_tests;
mod walker_tests;

use crate::parsers::Document;

/// Parses `body_html` wrapped in a minimal document
pub(super) fn document_with_body(body_html: &str) -> Document {
    Document::parse(&format!(
        "<!DOCTYPE html><html><head><title>Test</title></head><body>{}</body></html>",
        body_html
    ))
}
