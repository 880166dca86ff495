use crate::html::HtmlNode;
use crate::parsing::inline::{Span, SyntaxError, text_to_spans};

use super::{
    classify::BlockType,
    kinds::{BlockQuote, CodeFence, Heading, ListMarker},
};

/// Builds the subtree for one classified block.
///
/// Code blocks are raw zones: their text becomes a single code span with no
/// inline parsing. Every other block runs the inline splitter over its text.
///
/// # Errors
/// Propagates [`SyntaxError`] from inline parsing.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, SyntaxError> {
    let node = match block_type {
        BlockType::Heading(level) => {
            let text = Heading::strip_marker(block, level);
            HtmlNode::parent(format!("h{level}"), text_to_children(text)?)
        }
        BlockType::Code => {
            let code = Span::Code(CodeFence::inner(block).to_string());
            HtmlNode::parent("pre", vec![code.to_html_node()])
        }
        BlockType::Quote => {
            let text = BlockQuote::strip_markers(block);
            HtmlNode::parent("blockquote", text_to_children(&text)?)
        }
        BlockType::UnorderedList => HtmlNode::parent("ul", list_items(block)?),
        BlockType::OrderedList => HtmlNode::parent("ol", list_items(block)?),
        BlockType::Paragraph => {
            let text = block.replace('\n', " ");
            HtmlNode::parent("p", text_to_children(&text)?)
        }
    };
    Ok(node)
}

fn list_items(block: &str) -> Result<Vec<HtmlNode>, SyntaxError> {
    block
        .split('\n')
        .map(|line| {
            text_to_children(ListMarker::strip(line)).map(|items| HtmlNode::parent("li", items))
        })
        .collect()
}

fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, SyntaxError> {
    Ok(text_to_spans(text)?
        .iter()
        .map(Span::to_html_node)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::RenderError;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(block: &str, block_type: BlockType) -> String {
        block_to_html_node(block, block_type)
            .unwrap()
            .to_html()
            .unwrap()
    }

    #[rstest]
    #[case("# Heading", 1, "<h1>Heading</h1>")]
    #[case("### Third _level_", 3, "<h3>Third <i>level</i></h3>")]
    #[case("###### Six", 6, "<h6>Six</h6>")]
    fn headings(#[case] block: &str, #[case] level: u8, #[case] expected: &str) {
        assert_eq!(render(block, BlockType::Heading(level)), expected);
    }

    #[test]
    fn code_block_skips_inline_parsing() {
        let html = render(
            "```\nThis is text that _should_ remain\nthe **same** even with inline stuff\n```",
            BlockType::Code,
        );
        assert_eq!(
            html,
            "<pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre>"
        );
    }

    #[test]
    fn single_line_code_block() {
        assert_eq!(
            render("``` let x = 1; ```", BlockType::Code),
            "<pre><code>let x = 1; </code></pre>"
        );
    }

    #[test]
    fn quote_strips_markers_and_parses_inline() {
        assert_eq!(
            render("> a **bold** quote\n> on two > lines", BlockType::Quote),
            "<blockquote>a <b>bold</b> quote\non two  lines</blockquote>"
        );
    }

    #[test]
    fn unordered_list_items() {
        assert_snapshot!(
            render("- a\n- b\n- c", BlockType::UnorderedList),
            @"<ul><li>a</li><li>b</li><li>c</li></ul>"
        );
    }

    #[test]
    fn ordered_list_items_parse_inline() {
        assert_eq!(
            render("1. `one`\n2. [two](/2)", BlockType::OrderedList),
            r#"<ol><li><code>one</code></li><li><a href="/2">two</a></li></ol>"#
        );
    }

    #[test]
    fn paragraph_joins_soft_wrapped_lines() {
        assert_eq!(
            render("first line\nsecond **line**", BlockType::Paragraph),
            "<p>first line second <b>line</b></p>"
        );
    }

    #[test]
    fn syntax_errors_propagate() {
        let err = block_to_html_node("an **unclosed bold", BlockType::Paragraph).unwrap_err();
        assert!(matches!(
            err,
            SyntaxError::UnmatchedDelimiter { delimiter: "**", .. }
        ));
    }

    #[rstest]
    #[case("- a\n-", BlockType::UnorderedList, "li")]
    #[case(">", BlockType::Quote, "blockquote")]
    #[case("****", BlockType::Paragraph, "p")]
    fn blocks_without_text_build_but_fail_to_render(
        #[case] block: &str,
        #[case] block_type: BlockType,
        #[case] empty_tag: &str,
    ) {
        let node = block_to_html_node(block, block_type).unwrap();
        assert_eq!(
            node.to_html().unwrap_err(),
            RenderError::EmptyParent {
                tag: empty_tag.to_string()
            }
        );
    }

    #[test]
    fn heading_keeps_whitespace_after_tab_separator() {
        assert_eq!(
            render("#\tTitle", BlockType::Heading(1)),
            "<h1>\tTitle</h1>"
        );
    }
}
