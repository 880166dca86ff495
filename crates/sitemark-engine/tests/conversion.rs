use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sitemark_engine::{
    BlockType, ConvertError, HtmlNode, RenderError, Span, SyntaxError, TitleError, classify,
    extract_title, markdown_to_html, markdown_to_html_node, segment, text_to_spans,
};

#[test]
fn heading_scenario() {
    assert_eq!(classify("# Heading"), BlockType::Heading(1));
    assert_eq!(
        markdown_to_html("# Heading").unwrap(),
        "<div><h1>Heading</h1></div>"
    );
}

#[test]
fn unordered_list_scenario() {
    assert_eq!(
        markdown_to_html("- a\n- b\n- c").unwrap(),
        "<div><ul><li>a</li><li>b</li><li>c</li></ul></div>"
    );
}

#[test]
fn code_block_scenario() {
    assert_eq!(
        markdown_to_html("```\nline1\nline2\n```").unwrap(),
        "<div><pre><code>line1\nline2\n</code></pre></div>"
    );
}

#[test]
fn indented_code_block_has_lines_trimmed() {
    let md = "
        ```
        This is text that _should_ remain
        the **same** even with inline stuff
        ```
        ";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn full_document() {
    let md = "# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\" -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. first
2. _second_
3. `third`
";
    assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @r#"<div><h1>Tolkien Fan Club</h1><p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></img></p><p>Here's the deal, <b>I like Tolkien</b>.</p><blockquote>"I am in fact a Hobbit in all but size." -- J.R.R. Tolkien</blockquote><h2>Blog posts</h2><ul><li><a href="/blog/glorfindel">Why Glorfindel is More Impressive than Legolas</a></li><li><a href="/blog/tom">Why Tom Bombadil Was a Mistake</a></li></ul><ol><li>first</li><li><i>second</i></li><li><code>third</code></li></ol></div>"#
    );
}

#[test]
fn inline_scenario_span_order() {
    let spans = text_to_spans(
        "This is **text** with an _italic_ word and a `code block` and an ![alt](u1) and a [link](u2)",
    )
    .unwrap();
    assert_eq!(
        spans,
        vec![
            Span::text("This is "),
            Span::Bold("text".into()),
            Span::text(" with an "),
            Span::Italic("italic".into()),
            Span::text(" word and a "),
            Span::Code("code block".into()),
            Span::text(" and an "),
            Span::image("alt", "u1"),
            Span::text(" and a "),
            Span::link("link", "u2"),
        ]
    );
}

#[rstest]
#[case("plain words only")]
#[case("some **bold** and _italic_ and `code`")]
#[case("**a**_b_`c`")]
fn visible_text_round_trips(#[case] text: &str) {
    let spans = text_to_spans(text).unwrap();
    let visible: String = spans
        .iter()
        .map(|span| span.to_html_node().text_content())
        .collect();
    let expected = text.replace("**", "").replace(['_', '`'], "");
    assert_eq!(visible, expected);
}

#[test]
fn segmenting_a_single_block_is_idempotent() {
    let block = "- one\n- two";
    assert_eq!(segment(block), vec![block.to_string()]);
}

#[test]
fn empty_document_builds_childless_root_that_fails_to_render() {
    let root = markdown_to_html_node("  \n\n \t \n").unwrap();
    assert_eq!(root, HtmlNode::parent("div", vec![]));
    assert_eq!(
        markdown_to_html("").unwrap_err(),
        ConvertError::Render(RenderError::EmptyParent {
            tag: "div".to_string()
        })
    );
}

#[test]
fn unbalanced_delimiter_aborts_document() {
    let err = markdown_to_html("# Fine\n\nbroken _italic").unwrap_err();
    assert_eq!(
        err,
        ConvertError::Syntax(SyntaxError::UnmatchedDelimiter {
            delimiter: "_",
            text: "broken _italic".to_string(),
        })
    );
}

#[rstest]
#[case("- a\n-", "li")]
#[case("# Title\n\n>", "blockquote")]
#[case("****", "p")]
fn block_without_text_fails_to_render(#[case] markdown: &str, #[case] tag: &str) {
    assert_eq!(
        markdown_to_html(markdown).unwrap_err(),
        ConvertError::Render(RenderError::EmptyParent {
            tag: tag.to_string()
        })
    );
}

#[test]
fn title_extraction() {
    assert_eq!(
        extract_title("## Intro\n\n### Detail\n\n# The Title\n\ntext").unwrap(),
        "The Title"
    );
    assert_eq!(
        extract_title("## Intro\n\nno level one here"),
        Err(TitleError::NotFound)
    );
}

#[test]
fn html_is_not_escaped() {
    assert_eq!(
        markdown_to_html("a <em>raw</em> & tag").unwrap(),
        "<div><p>a <em>raw</em> & tag</p></div>"
    );
}
