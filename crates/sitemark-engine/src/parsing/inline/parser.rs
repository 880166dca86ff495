use super::{
    delimiter::{SyntaxError, split_delimited},
    kinds::Delimited,
    media::{split_images, split_links},
    types::Span,
};

/// Parses a block's inline text into a flat sequence of [`Span`]s.
///
/// # Pass Order
/// Bold, italic and code delimiters are split first (in that order), then
/// images, then links. Images must go before links, since the link pattern
/// also matches the `[alt](url)` tail of an image reference.
///
/// # Errors
/// Fails with [`SyntaxError`] if any delimiter is left unmatched.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, SyntaxError> {
    let mut spans = vec![Span::text(text)];
    for kind in Delimited::PIPELINE {
        spans = split_delimited(spans, kind)?;
    }
    let spans = split_links(split_images(spans));

    log::trace!("parsed {} inline spans from {} bytes", spans.len(), text.len());
    Ok(spans)
}
