use crate::html::HtmlNode;

/// One unit of inline content produced by the inline splitter.
///
/// Spans are plain values: they own their text and compare structurally,
/// so two spans are equal when their variant, text and URL all match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Text with no markup.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_`
    Italic(String),
    /// `` `code` ``
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl Span {
    pub fn text(text: impl Into<String>) -> Self {
        Span::Text(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// The text payload (alt text for images).
    pub fn content(&self) -> &str {
        match self {
            Span::Text(t) | Span::Bold(t) | Span::Italic(t) | Span::Code(t) => t,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// The destination URL for links and images.
    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Maps a span onto the leaf node that renders it.
    ///
    /// Plain text becomes an untagged leaf, images an `<img>` with an empty body.
    pub fn to_html_node(&self) -> HtmlNode {
        match self {
            Span::Text(t) => HtmlNode::text(t.as_str()),
            Span::Bold(t) => HtmlNode::leaf("b", t.as_str()),
            Span::Italic(t) => HtmlNode::leaf("i", t.as_str()),
            Span::Code(t) => HtmlNode::leaf("code", t.as_str()),
            Span::Link { text, url } => HtmlNode::leaf("a", text.as_str()).with_attr("href", url),
            Span::Image { alt, url } => HtmlNode::leaf("img", "")
                .with_attr("src", url)
                .with_attr("alt", alt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spans_compare_structurally() {
        assert_eq!(Span::text("a"), Span::Text("a".to_string()));
        assert_ne!(Span::Bold("a".to_string()), Span::Italic("a".to_string()));
        assert_ne!(Span::link("a", "u1"), Span::link("a", "u2"));
    }

    #[test]
    fn content_and_url_accessors() {
        let image = Span::image("alt text", "pic.png");
        assert_eq!(image.content(), "alt text");
        assert_eq!(image.url(), Some("pic.png"));
        assert_eq!(Span::Code("x".to_string()).url(), None);
    }

    #[test]
    fn text_span_renders_raw() {
        let html = Span::text("plain").to_html_node().to_html().unwrap();
        assert_eq!(html, "plain");
    }

    #[test]
    fn styled_spans_render_with_tags() {
        assert_eq!(
            Span::Bold("b".into()).to_html_node().to_html().unwrap(),
            "<b>b</b>"
        );
        assert_eq!(
            Span::Italic("i".into()).to_html_node().to_html().unwrap(),
            "<i>i</i>"
        );
        assert_eq!(
            Span::Code("c".into()).to_html_node().to_html().unwrap(),
            "<code>c</code>"
        );
    }

    #[test]
    fn link_renders_href() {
        let html = Span::link("click", "https://example.com")
            .to_html_node()
            .to_html()
            .unwrap();
        assert_eq!(html, r#"<a href="https://example.com">click</a>"#);
    }

    #[test]
    fn image_renders_src_then_alt_with_empty_body() {
        let html = Span::image("a cat", "cat.png")
            .to_html_node()
            .to_html()
            .unwrap();
        assert_eq!(html, r#"<img src="cat.png" alt="a cat"></img>"#);
    }
}
