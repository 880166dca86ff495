use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker};

/// The structural type of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    /// Level 1 to 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Classifies a block by its text. Total: anything unmatched is a paragraph.
///
/// Rules are tried in priority order: heading, code, quote, unordered list,
/// ordered list. Markers are compared against whole whitespace-delimited
/// tokens, so `#Title` is not a heading and `>quote` is not a quote.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::encloses(block) {
        return BlockType::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();
    if lines.iter().all(|l| first_token(l) == Some(BlockQuote::MARKER)) {
        return BlockType::Quote;
    }
    if lines.iter().all(|l| first_token(l) == Some(ListMarker::BULLET)) {
        return BlockType::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, l)| first_token(l) == Some(ListMarker::ordinal(i).as_str()))
    {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

fn heading_level(block: &str) -> Option<u8> {
    let mut tokens = block.split_whitespace();
    let level = Heading::level_of(tokens.next()?)?;
    tokens.next().map(|_| level)
}
