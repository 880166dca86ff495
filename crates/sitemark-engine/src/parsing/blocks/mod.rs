//! # Block Parsing
//!
//! Segmentation, classification and tree building for block-level structure.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut into blocks on blank lines
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//! 3. **Tree Building** (`builder`): each block becomes one `HtmlNode` subtree,
//!    running the inline parser over its text
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence, BlockQuote, ListMarker)
//! - **`segment`**: `segment()` splits raw text into trimmed block strings
//! - **`classify`**: `BlockType` and the priority-ordered `classify()`
//! - **`builder`**: `block_to_html_node()` maps a classified block to its subtree
//!
//! ## Key Invariants
//!
//! - Classification is total: anything unmatched is a paragraph
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Lists are flat; there is no nesting

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;

pub use builder::block_to_html_node;
pub use classify::{BlockType, classify};
pub use segment::segment;
