pub mod images;
pub mod seo;
pub mod text;
pub mod walker;

#[cfg(test)]
mod tests;

use scraper::{ElementRef, Html};

use crate::error::{ExtractError, RequiredNode};

pub use images::extract_images;
pub use seo::extract_seo;
pub use text::extract_texts;

/// First direct element child of `parent` with the given tag name
pub(crate) fn child_element<'a>(parent: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == name)
}

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document
    pub fn parse(content: &str) -> Self {
        let html = Html::parse_document(content);
        ::log::debug!("Parsed document ({} bytes)", content.len());
        Self { html }
    }

    /// The top-level `html` element
    pub fn html(&self) -> Result<ElementRef<'_>, ExtractError> {
        self.html
            .tree
            .root()
            .children()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "html")
            .ok_or(ExtractError::MissingNode(RequiredNode::Html))
    }

    /// The `body` child of the `html` element
    pub fn body(&self) -> Result<ElementRef<'_>, ExtractError> {
        child_element(self.html()?, "body").ok_or(ExtractError::MissingNode(RequiredNode::Body))
    }
}
