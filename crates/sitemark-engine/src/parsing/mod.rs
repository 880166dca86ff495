pub mod blocks;
pub mod inline;
pub mod title;

use crate::html::HtmlNode;

use blocks::{block_to_html_node, classify, segment};
use inline::SyntaxError;

/// Tag of the container that holds one subtree per block.
pub const ROOT_TAG: &str = "div";

/// Converts a markdown document into a `<div>` holding one subtree per block.
///
/// A document without blocks produces a root with no children, which the
/// renderer rejects.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, SyntaxError> {
    let children = segment(markdown)
        .iter()
        .map(|block| {
            let block_type = classify(block);
            log::debug!("block classified as {block_type:?}: {block:?}");
            block_to_html_node(block, block_type)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(ROOT_TAG, children))
}
