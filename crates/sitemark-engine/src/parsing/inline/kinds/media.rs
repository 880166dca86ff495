use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::Span;

/// Inline references with a bracketed label and a parenthesised destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    /// `![alt](url)`
    Image,
    /// `[text](url)`, never directly after a `!`
    Link,
}

impl Media {
    /// Marker that turns a link into an image.
    pub const IMAGE_BANG: char = '!';

    pub fn pattern(self) -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();

        match self {
            Media::Image => IMAGE_REGEX.get_or_init(|| {
                Regex::new(r"!\[([^\]]*)\]\(([^\)]*)\)").expect("Invalid image regex")
            }),
            Media::Link => LINK_REGEX.get_or_init(|| {
                Regex::new(r"\[([^\]]*)\]\(([^\)]*)\)").expect("Invalid link regex")
            }),
        }
    }

    pub fn span(self, label: &str, url: &str) -> Span {
        match self {
            Media::Image => Span::image(label, url),
            Media::Link => Span::link(label, url),
        }
    }
}
