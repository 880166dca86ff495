/// Triple-backtick fence knowledge.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether the block opens and closes with a fence. A block shorter
    /// than two fences never matches, so a lone ```` ``` ```` is not code.
    pub fn encloses(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// The text between the fences, with leading whitespace removed.
    pub fn inner(block: &str) -> &str {
        let n = Self::FENCE.len();
        block
            .get(n..block.len().saturating_sub(n))
            .unwrap_or("")
            .trim_start()
    }
}
