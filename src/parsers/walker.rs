//! Depth-first traversal of a parsed markup tree.
//!
//! The walker owns the traversal order; a [`Visitor`] owns the extraction
//! policy. Element and text nodes are the only kinds handed to the visitor,
//! everything else the parser produces (comments, doctypes) is ignored.

use scraper::node::Text;
use scraper::{ElementRef, Node};

/// What a visitor wants done with an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit<T> {
    /// Contribute nothing and do not look at the children
    Skip,
    /// Contribute one value in place of the whole subtree
    Emit(T),
    /// Contribute whatever the children contribute
    Descend,
}

/// Per-node extraction rules
pub trait Visitor {
    type Output;

    fn visit_element(&self, element: ElementRef<'_>) -> Visit<Self::Output>;

    fn visit_text(&self, text: &Text) -> Option<Self::Output>;
}

/// Walks `root` in pre-order and collects the visitor's output in document order.
///
/// An explicit stack is used so arbitrarily deep documents are safe to walk.
pub fn walk<V: Visitor>(root: ElementRef<'_>, visitor: &V) -> Vec<V::Output> {
    let mut results = Vec::new();
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Element(_) => {
                let Some(element) = ElementRef::wrap(node) else {
                    continue;
                };
                match visitor.visit_element(element) {
                    Visit::Skip => {}
                    Visit::Emit(value) => results.push(value),
                    // Reversed so the first child is popped first
                    Visit::Descend => stack.extend(node.children().rev()),
                }
            }
            Node::Text(text) => {
                if let Some(value) = visitor.visit_text(text) {
                    results.push(value);
                }
            }
            _ => {}
        }
    }

    results
}
