use super::{kinds::Media, types::Span};

/// A label/destination pair found by [`extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRef<'a> {
    pub label: &'a str,
    pub url: &'a str,
}

impl MediaRef<'_> {
    /// The exact source text this reference was matched from.
    fn literal(&self, kind: Media) -> String {
        match kind {
            Media::Image => format!("![{}]({})", self.label, self.url),
            Media::Link => format!("[{}]({})", self.label, self.url),
        }
    }
}

/// Finds every `kind` reference in `text`, left to right.
///
/// A link match starting right after `!` is rejected and the search resumes
/// one byte later, so links never claim the bracket of an image.
pub fn extract(kind: Media, text: &str) -> Vec<MediaRef<'_>> {
    let re = kind.pattern();
    let mut out = vec![];
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if kind == Media::Link && text[..whole.start()].ends_with(Media::IMAGE_BANG) {
            // `[` is a single byte
            pos = whole.start() + 1;
            continue;
        }

        out.push(MediaRef {
            label: caps.get(1).map_or("", |m| m.as_str()),
            url: caps.get(2).map_or("", |m| m.as_str()),
        });
        pos = whole.end();
    }

    out
}

pub fn extract_images(text: &str) -> Vec<MediaRef<'_>> {
    extract(Media::Image, text)
}

pub fn extract_links(text: &str) -> Vec<MediaRef<'_>> {
    extract(Media::Link, text)
}

/// Splits `![alt](url)` references out of every text span.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_media(spans, Media::Image)
}

/// Splits `[text](url)` references out of every text span.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_media(spans, Media::Link)
}

fn split_media(spans: Vec<Span>, kind: Media) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Text(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        if !push_split(kind, &text, &mut out) {
            out.push(Span::Text(text));
        }
    }

    out
}

/// For each match in order, the text before the first occurrence of its
/// literal source is emitted (even when empty), then the media span; any
/// non-empty remainder after the last match is emitted as text.
///
/// Returns `false`, pushing nothing, when `text` has no matches.
fn push_split(kind: Media, text: &str, out: &mut Vec<Span>) -> bool {
    let refs = extract(kind, text);
    if refs.is_empty() {
        return false;
    }

    let mut remaining = text;
    for r in refs {
        let literal = r.literal(kind);
        let Some((before, after)) = remaining.split_once(literal.as_str()) else {
            continue;
        };
        out.push(Span::text(before));
        out.push(kind.span(r.label, r.url));
        remaining = after;
    }

    if !remaining.is_empty() {
        out.push(Span::text(remaining));
    }
    true
}
