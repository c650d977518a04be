pub const DEFAULT_CHUNK_MAX_CHARS: usize = 4000;

/// Splits `text` into consecutive, non-overlapping slices of at most
/// `max_chars` characters. The cut ignores word and sentence boundaries.
///
/// Concatenating the result always yields `text`; empty input yields no chunks.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let split_at = rest
            .char_indices()
            .nth(max_chars)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(split_at);
        chunks.push(chunk);
        rest = tail;
    }

    chunks
}
