/// Blockquote prefix knowledge.
pub struct BlockQuote;

impl BlockQuote {
    pub const MARKER: &'static str = ">";

    /// Removes every `>` on each line, trims the lines and the whole result.
    pub fn strip_markers(block: &str) -> String {
        block
            .lines()
            .map(|line| line.replace(Self::MARKER, "").trim().to_string())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}
