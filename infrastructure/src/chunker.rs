use anyhow::ensure;
use domain::models::TextSegment;
use shared::types::Result;

/// Fixed-size splitter with a configurable overlap between neighbouring
/// segments. Purely length-based: no sentence or paragraph awareness, and
/// no content is dropped.
pub struct Chunker {
    chunk_size: usize,
    overlap: usize,
}

impl Chunker {
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        ensure!(chunk_size > 0, "chunk size must be positive");
        ensure!(
            overlap < chunk_size,
            "chunk overlap ({overlap}) must be smaller than the chunk size ({chunk_size})"
        );
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    pub fn split(&self, text: &str) -> Vec<TextSegment> {
        if text.len() <= self.chunk_size {
            return vec![TextSegment {
                index: 0,
                text: text.to_string(),
            }];
        }

        let mut segments = Vec::new();
        let mut start = 0;
        while start < text.len() {
            let mut end = (start + self.chunk_size).min(text.len());
            // Cut on UTF-8 boundaries only.
            while end < text.len() && !text.is_char_boundary(end) {
                end += 1;
            }
            segments.push(TextSegment {
                index: segments.len(),
                text: text[start..end].to_string(),
            });

            if end == text.len() {
                break;
            }
            let mut next_start = end - self.overlap;
            while next_start > 0 && !text.is_char_boundary(next_start) {
                next_start -= 1;
            }
            start = next_start;
        }
        segments
    }
}
