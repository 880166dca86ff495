//! # Block Kinds
//!
//! Block-specific types that own their syntax markers, so neither the
//! classifier nor the tree builder hardcodes `#`, `>` or `` ``` ``.
//!
//! - **`Heading`**: `MARKER = '#'`, levels 1 to 6
//! - **`CodeFence`**: `FENCE = "```"`
//! - **`BlockQuote`**: `MARKER = ">"`
//! - **`ListMarker`**: `-` bullets and `1.`-style numbering

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::ListMarker;
