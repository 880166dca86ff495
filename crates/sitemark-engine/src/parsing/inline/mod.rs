//! # Inline Parsing
//!
//! Multi-pass span splitting over the text of a single block.
//!
//! ## Architecture
//!
//! Parsing starts from one text span holding the whole block text. Each pass
//! walks the current span list and slices only the plain text spans, so a
//! span resolved by an earlier pass is never parsed again:
//!
//! 1. `**` → bold
//! 2. `_` → italic
//! 3. `` ` `` → code
//! 4. `![alt](url)` → image
//! 5. `[text](url)` → link
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Text, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: Span kinds with owned delimiters (`Delimited`, `Media`)
//! - **`delimiter`**: `split_by_delimiter()` for paired literal delimiters
//! - **`media`**: `split_images()` / `split_links()` for bracketed references
//! - **`parser`**: `text_to_spans()` main entry point running the passes in order

pub mod delimiter;
pub mod kinds;
pub mod media;
pub mod parser;
pub mod types;

pub use delimiter::{SyntaxError, split_by_delimiter};
pub use media::{extract_images, extract_links, split_images, split_links};
pub use parser::text_to_spans;
pub use types::Span;
