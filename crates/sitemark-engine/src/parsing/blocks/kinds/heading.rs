/// ATX heading marker knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Level of a heading token: one to six `#` and nothing else.
    pub fn level_of(token: &str) -> Option<u8> {
        let len = token.len();
        if (1..=Self::MAX_LEVEL as usize).contains(&len) && token.chars().all(|c| c == Self::MARKER)
        {
            Some(len as u8)
        } else {
            None
        }
    }

    /// Text after the `#` run and the single space that follows it.
    pub fn strip_marker(block: &str, level: u8) -> &str {
        let rest = block.trim_start().get(level as usize..).unwrap_or("");
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}
