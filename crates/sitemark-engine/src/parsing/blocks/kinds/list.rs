/// List item marker knowledge.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "-";

    /// The marker expected on the zero-based line `index` of an ordered list.
    pub fn ordinal(index: usize) -> String {
        format!("{}.", index + 1)
    }

    /// Item text after the first whitespace-delimited token.
    pub fn strip(line: &str) -> &str {
        let line = line.trim_start();
        match line.find(char::is_whitespace) {
            Some(end) => line[end..].trim_start(),
            None => "",
        }
    }
}
