/// The document has no level-1 heading to take a title from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("no title found: document has no `# ` heading")]
    NotFound,
}

const TITLE_MARKER: &str = "# ";

/// Returns the text of the first `# ` line in the document.
///
/// Lines are trimmed before matching, and block structure is ignored: a
/// `# ` line inside a paragraph or code block still counts.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or(TitleError::NotFound)
}
