use scraper::ElementRef;
use scraper::node::Text;

use crate::parsers::walker::{self, Visit, Visitor};

/// Snippets shorter than this (in characters, after trimming) are dropped
pub const MIN_SNIPPET_CHARS: usize = 10;

/// Elements whose whole subtree is never read for text
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Collects trimmed text snippets from text nodes
#[derive(Debug, Clone, Copy)]
pub struct TextVisitor {
    pub min_chars: usize,
}

impl Default for TextVisitor {
    fn default() -> Self {
        Self {
            min_chars: MIN_SNIPPET_CHARS,
        }
    }
}

impl TextVisitor {
    /// Applies the snippet rules to a single raw text value
    pub fn snippet(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();

        // Unparsed iframe markup can leak through as text (e.g. inside noscript)
        if trimmed.starts_with("<iframe") {
            return None;
        }

        if trimmed.chars().count() < self.min_chars {
            return None;
        }

        Some(trimmed.to_string())
    }
}

impl Visitor for TextVisitor {
    type Output = String;

    fn visit_element(&self, element: ElementRef<'_>) -> Visit<String> {
        if SKIPPED_ELEMENTS.contains(&element.value().name()) {
            Visit::Skip
        } else {
            Visit::Descend
        }
    }

    fn visit_text(&self, text: &Text) -> Option<String> {
        self.snippet(&text.text)
    }
}

/// Extracts text snippets from a subtree, in document order
pub fn extract_texts(root: ElementRef<'_>) -> Vec<String> {
    let snippets = walker::walk(root, &TextVisitor::default());
    ::log::debug!("Text parser found {} snippets", snippets.len());
    snippets
}
