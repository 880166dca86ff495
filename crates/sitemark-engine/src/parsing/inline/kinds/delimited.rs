use crate::parsing::inline::types::Span;

/// Span kinds marked by a matching pair of literal delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    Bold,
    Italic,
    Code,
}

impl Delimited {
    /// Resolution order of the delimiter passes. `**` must be consumed
    /// before `_` and `` ` `` so literal markers inside bold text survive.
    pub const PIPELINE: [Delimited; 3] = [Delimited::Bold, Delimited::Italic, Delimited::Code];

    pub const fn delimiter(self) -> &'static str {
        match self {
            Delimited::Bold => "**",
            Delimited::Italic => "_",
            Delimited::Code => "`",
        }
    }

    /// Wraps split-out text in the span variant for this kind.
    pub fn span(self, text: impl Into<String>) -> Span {
        let text = text.into();
        match self {
            Delimited::Bold => Span::Bold(text),
            Delimited::Italic => Span::Italic(text),
            Delimited::Code => Span::Code(text),
        }
    }
}
