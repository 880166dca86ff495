//! # Inline Kinds
//!
//! Inline span kinds that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimited`**: `**bold**`, `_italic_` and `` `code` `` spans, split on a
//!   literal delimiter string
//! - **`Media`**: `![alt](url)` images and `[text](url)` links, matched by pattern
//!
//! The splitter calls these constants; it never hardcodes `**` or `](`.

pub mod delimited;
pub mod media;

pub use delimited::Delimited;
pub use media::Media;
