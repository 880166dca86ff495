/// Splits a document into block strings separated by blank lines.
///
/// Any run of blank (or whitespace-only) lines is one separator. Every line
/// of a block is trimmed and the lines are rejoined with `\n`; empty blocks
/// never appear in the output.
pub fn segment(document: &str) -> Vec<String> {
    let mut blocks = vec![];
    let mut current: Vec<&str> = vec![];

    for line in document.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut blocks);

    blocks
}

fn flush(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if !current.is_empty() {
        blocks.push(current.join("\n"));
        current.clear();
    }
}
