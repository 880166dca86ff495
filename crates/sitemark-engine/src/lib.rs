pub mod error;
pub mod html;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use html::{Attributes, HtmlNode, RenderError};
pub use parsing::{
    blocks::{BlockType, classify, segment},
    inline::{Span, SyntaxError, text_to_spans},
    markdown_to_html_node,
    title::{TitleError, extract_title},
};

/// Converts and renders a markdown document in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(markdown_to_html_node(markdown)?.to_html()?)
}
