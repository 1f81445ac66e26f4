use scraper::{ElementRef, Node};

use crate::error::{ExtractError, RequiredNode};
use crate::parsers::child_element;
use crate::results::SeoMetadata;

/// Reads title and meta description from the direct children of `<head>`.
///
/// Only structural children are inspected: a `<title>` nested deeper than
/// `html > head > title` is not found. A missing description is not an
/// error and yields an empty string.
pub fn extract_seo(html: ElementRef<'_>, path: &str) -> Result<SeoMetadata, ExtractError> {
    let head = child_element(html, "head").ok_or(ExtractError::MissingNode(RequiredNode::Head))?;
    let title =
        child_element(head, "title").ok_or(ExtractError::MissingNode(RequiredNode::Title))?;

    let title_text = title
        .children()
        .find_map(|child| match child.value() {
            Node::Text(text) => Some((&*text.text).to_string()),
            _ => None,
        })
        .ok_or(ExtractError::MissingNode(RequiredNode::TitleText))?;

    Ok(SeoMetadata {
        title: title_text,
        description: meta_description(head),
        path: path.to_string(),
    })
}

/// `content` of the first `<meta name="description">` child of `head`
fn meta_description(head: ElementRef<'_>) -> String {
    let description = head
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "meta")
        .find(|meta| meta.value().attr("name") == Some("description"));

    match description {
        Some(meta) => match meta.value().attr("content") {
            Some(content) => content.to_string(),
            None => {
                ::log::warn!("META description node has no content attribute");
                String::new()
            }
        },
        None => {
            ::log::warn!("META node with description missing");
            String::new()
        }
    }
}
