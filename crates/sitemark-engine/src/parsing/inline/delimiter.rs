use super::{kinds::Delimited, types::Span};

/// An inline delimiter that opens a span but never closes it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unmatched `{delimiter}` delimiter in text span {text:?}")]
    UnmatchedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}

/// Splits every text span on `delimiter`, turning enclosed fragments into `kind` spans.
///
/// Fragments at even positions stay text and fragments at odd positions
/// become `kind`. Empty fragments are dropped. Spans that are not plain text
/// pass through untouched, so markup inside an already resolved span is
/// kept as literal text.
///
/// # Errors
/// Returns [`SyntaxError::UnmatchedDelimiter`] when a text span contains an
/// odd number of delimiters.
pub fn split_by_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: Delimited,
) -> Result<Vec<Span>, SyntaxError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        // an odd delimiter count splits into an even number of fragments
        if text.matches(delimiter).count() % 2 == 1 {
            return Err(SyntaxError::UnmatchedDelimiter { delimiter, text });
        }

        for (i, fragment) in text.split(delimiter).enumerate() {
            if fragment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::text(fragment));
            } else {
                out.push(kind.span(fragment));
            }
        }
    }

    Ok(out)
}

/// Runs [`split_by_delimiter`] for `kind` using its own delimiter.
pub fn split_delimited(spans: Vec<Span>, kind: Delimited) -> Result<Vec<Span>, SyntaxError> {
    split_by_delimiter(spans, kind.delimiter(), kind)
}
