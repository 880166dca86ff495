use crate::html::RenderError;
use crate::parsing::inline::SyntaxError;
use crate::parsing::title::TitleError;

/// Any failure converting one document to HTML.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("structural error: {0}")]
    Render(#[from] RenderError),
    #[error(transparent)]
    Title(#[from] TitleError),
}
