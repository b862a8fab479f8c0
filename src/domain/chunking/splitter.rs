//! Recursive text splitter
//!
//! Splits a document into overlapping chunks, preferring the largest
//! semantic boundary that fits: paragraph break, then sentence break, then
//! word break, then a raw character cut. Each chunk after the first begins
//! exactly `chunk_overlap` characters before the end of the previous chunk.
//! Chunks are emitted untrimmed so that dropping the leading overlap of each
//! subsequent chunk and concatenating reconstructs the original text.

use unicode_segmentation::UnicodeSegmentation;

use super::{Chunk, ChunkMetadata, ChunkingConfig};
use crate::domain::DomainError;

/// Splitter producing a lazy, restartable sequence of chunks
#[derive(Debug, Clone)]
pub struct RecursiveSplitter {
    config: ChunkingConfig,
}

impl RecursiveSplitter {
    /// Create a new splitter, validating the configuration up front so a bad
    /// overlap can never corrupt chunk boundaries mid-stream
    pub fn new(config: ChunkingConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Split text into a lazy iterator of chunks
    pub fn split<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            config: self.config.clone(),
            start: 0,
            char_start: 0,
            index: 0,
            done: text.is_empty(),
        }
    }

    /// Split text into a collected vector of chunks
    pub fn split_text(&self, text: &str) -> Vec<Chunk> {
        self.split(text).collect()
    }
}

/// Iterator over the chunks of one document
#[derive(Debug)]
pub struct Chunks<'a> {
    text: &'a str,
    config: ChunkingConfig,
    /// Byte offset of the next chunk start
    start: usize,
    /// Character offset of the next chunk start
    char_start: usize,
    index: usize,
    done: bool,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.done {
            return None;
        }

        let remaining = &self.text[self.start..];
        let (window_bytes, window_chars) = take_chars(remaining, self.config.chunk_size);

        if window_bytes == remaining.len() {
            // Everything left fits in one chunk, no trailing overlap
            self.done = true;
            let metadata =
                ChunkMetadata::new(self.index, self.char_start, self.char_start + window_chars);
            return Some(Chunk::new(remaining, metadata));
        }

        let window = &remaining[..window_bytes];
        let mut cut = find_split_point(window);
        let mut cut_chars = window[..cut].chars().count();

        // A chunk no longer than the overlap would make the next start move
        // backwards; fall back to a raw cut at the full window
        if cut_chars <= self.config.chunk_overlap {
            cut = window_bytes;
            cut_chars = window_chars;
        }

        let chunk_text = &window[..cut];
        let metadata =
            ChunkMetadata::new(self.index, self.char_start, self.char_start + cut_chars);
        let chunk = Chunk::new(chunk_text, metadata);

        // Next chunk starts chunk_overlap characters before this one ends
        let next_rel = if self.config.chunk_overlap == 0 {
            cut
        } else {
            chunk_text
                .char_indices()
                .rev()
                .nth(self.config.chunk_overlap - 1)
                .map(|(i, _)| i)
                .unwrap_or(0)
        };

        self.start += next_rel;
        self.char_start += cut_chars - self.config.chunk_overlap.min(cut_chars);
        self.index += 1;

        Some(chunk)
    }
}

/// Byte length and character count of up to `n` leading characters
fn take_chars(text: &str, n: usize) -> (usize, usize) {
    let mut chars = 0;

    for (i, _) in text.char_indices() {
        if chars == n {
            return (i, chars);
        }
        chars += 1;
    }

    (text.len(), chars)
}

/// Find the best split point within a full-size window, as a byte offset
fn find_split_point(window: &str) -> usize {
    // Paragraph break: split just after the blank line
    if let Some(pos) = window.rfind("\n\n") {
        if pos > 0 {
            return pos + 2;
        }
    }

    // Sentence break: keep only complete sentences in the chunk
    if let Some((idx, _)) = window.split_sentence_bound_indices().last() {
        if idx > 0 {
            return idx;
        }
    }

    // Word break: split just after the last whitespace
    if let Some(pos) = window.rfind(char::is_whitespace) {
        let ws_len = window[pos..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);
        let cut = pos + ws_len;

        if cut < window.len() {
            return cut;
        }
    }

    // Raw character cut
    window.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter(chunk_size: usize, chunk_overlap: usize) -> RecursiveSplitter {
        RecursiveSplitter::new(ChunkingConfig::new(chunk_size, chunk_overlap)).unwrap()
    }

    /// Reconstruct the original document by deduplicating overlaps
    fn reconstruct(chunks: &[Chunk], overlap: usize) -> String {
        let mut text = String::new();

        for (i, chunk) in chunks.iter().enumerate() {
            if i == 0 {
                text.push_str(&chunk.content);
            } else {
                let tail: String = chunk.content.chars().skip(overlap).collect();
                text.push_str(&tail);
            }
        }

        text
    }

    #[test]
    fn test_invalid_overlap_fails_at_construction() {
        let result = RecursiveSplitter::new(ChunkingConfig::new(10, 10));
        assert!(matches!(
            result,
            Err(DomainError::Configuration { .. })
        ));

        let result = RecursiveSplitter::new(ChunkingConfig::new(1, 5));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunks = splitter(10, 2).split_text("");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_input_shorter_than_chunk_size_yields_single_chunk() {
        let chunks = splitter(100, 10).split_text("Hello, World!");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "Hello, World!");
        assert_eq!(chunks[0].metadata.char_start, 0);
        assert_eq!(chunks[0].metadata.char_end, 13);
    }

    #[test]
    fn test_input_exactly_chunk_size_yields_single_chunk() {
        let chunks = splitter(5, 1).split_text("abcde");

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "abcde");
    }

    #[test]
    fn test_raw_cut_with_overlap() {
        // No semantic boundaries at all, so cuts are raw and the second
        // chunk starts 2 characters before the end of the first
        let chunks = splitter(10, 2).split_text("abcdefghijklmno");

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].content, "abcdefghij");
        assert_eq!(chunks[1].content, "ijklmno");
        assert_eq!(chunks[1].metadata.char_start, 8);
        assert_eq!(chunks[1].metadata.char_end, 15);
    }

    #[test]
    fn test_consecutive_chunks_overlap_exactly() {
        let overlap = 4;
        let text = "The quick brown fox jumps over the lazy dog and keeps running. ".repeat(8);
        let chunks = splitter(50, overlap).split_text(&text);

        assert!(chunks.len() > 2);

        for pair in chunks.windows(2) {
            let prev = &pair[0];
            let next = &pair[1];
            assert_eq!(prev.metadata.char_end - next.metadata.char_start, overlap);

            let prev_tail: String = prev
                .content
                .chars()
                .skip(prev.char_len() - overlap)
                .collect();
            let next_head: String = next.content.chars().take(overlap).collect();
            assert_eq!(prev_tail, next_head);
        }
    }

    #[test]
    fn test_chunks_never_exceed_chunk_size() {
        let text = "word ".repeat(200);
        let chunks = splitter(37, 5).split_text(&text);

        for chunk in &chunks {
            assert!(chunk.char_len() <= 37, "chunk too long: {:?}", chunk);
        }
    }

    #[test]
    fn test_reconstruction_round_trip() {
        let text = "First paragraph with some words.\n\nSecond paragraph follows here. \
                    It has two sentences in it.\n\nThird paragraph wraps things up nicely.";

        for (size, overlap) in [(20, 0), (25, 5), (40, 10), (200, 20)] {
            let chunks = splitter(size, overlap).split_text(text);
            assert_eq!(
                reconstruct(&chunks, overlap),
                text,
                "reconstruction failed for size={} overlap={}",
                size,
                overlap
            );
        }
    }

    #[test]
    fn test_prefers_paragraph_boundary() {
        let text = "Short intro.\n\nThis second paragraph is clearly longer than the first one.";
        let chunks = splitter(40, 0).split_text(text);

        assert!(chunks.len() >= 2);
        assert_eq!(chunks[0].content, "Short intro.\n\n");
    }

    #[test]
    fn test_prefers_sentence_boundary_without_paragraphs() {
        let text = "One sentence here. Another sentence there. And a third one after.";
        let chunks = splitter(45, 0).split_text(text);

        assert!(chunks.len() >= 2);
        assert!(
            chunks[0].content.trim_end().ends_with('.'),
            "expected sentence cut, got {:?}",
            chunks[0].content
        );
    }

    #[test]
    fn test_word_boundary_fallback() {
        let text = "alpha beta gamma delta epsilon zeta";
        let chunks = splitter(12, 0).split_text(text);

        for chunk in &chunks[..chunks.len() - 1] {
            assert!(
                chunk.content.ends_with(' '),
                "expected word cut, got {:?}",
                chunk.content
            );
        }
        assert_eq!(reconstruct(&chunks, 0), text);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let s = splitter(10, 2);
        let text = "abcdefghijklmno";

        let first: Vec<String> = s.split(text).map(|c| c.content).collect();
        let second: Vec<String> = s.split(text).map(|c| c.content).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_iterator_is_lazy() {
        let s = splitter(10, 2);
        let text = "abcdefghij".repeat(1000);

        let first = s.split(&text).next().unwrap();
        assert_eq!(first.char_len(), 10);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "héllo wörld çafé ünïté ".repeat(10);
        let chunks = splitter(15, 3).split_text(&text);

        assert!(chunks.len() > 1);
        assert_eq!(reconstruct(&chunks, 3), text);

        for chunk in &chunks {
            assert!(chunk.char_len() <= 15);
            assert_eq!(chunk.content.chars().count(), chunk.char_len());
        }
    }

    #[test]
    fn test_chunk_indices_are_sequential() {
        let text = "abc def ghi jkl mno pqr stu vwx yz0 123 456 789";
        let chunks = splitter(10, 2).split_text(text);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.metadata.chunk_index, i);
        }
    }
}
