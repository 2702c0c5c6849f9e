//! Mock service implementations shared by the integration tests.

use domain::models::SegmentMatch;
use domain::providers::{EmbeddingProvider, Generator, Retriever};
use shared::types::Result;

/// Deterministic local embedder: a small letter-frequency vector, good
/// enough for cosine ranking in tests without any service.
pub struct LetterFrequencyEmbedder;

pub fn letter_frequencies(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0f32; 26];
    for c in text.chars().filter(|c| c.is_ascii_alphabetic()) {
        let slot = (c.to_ascii_lowercase() as u8 - b'a') as usize;
        vector[slot] += 1.0;
    }
    vector
}

impl EmbeddingProvider for LetterFrequencyEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| letter_frequencies(t)).collect())
    }
}

/// Generator answering from a fixed (needle, reply) table matched against
/// the composed prompt.
pub struct CannedGenerator {
    responses: Vec<(String, String)>,
}

impl CannedGenerator {
    pub fn new(responses: &[(&str, &str)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(needle, reply)| (needle.to_string(), reply.to_string()))
                .collect(),
        }
    }
}

impl Generator for CannedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        for (needle, reply) in &self.responses {
            if prompt.contains(needle.as_str()) {
                return Ok(reply.clone());
            }
        }
        anyhow::bail!("no canned response matches the prompt")
    }
}

/// Retriever returning a fixed set of matches regardless of the query.
pub struct FixedRetriever {
    matches: Vec<SegmentMatch>,
}

impl FixedRetriever {
    pub fn new(matches: Vec<SegmentMatch>) -> Self {
        Self { matches }
    }
}

impl Retriever for FixedRetriever {
    async fn retrieve(&self, _query: &str, top_k: usize) -> Result<Vec<SegmentMatch>> {
        Ok(self.matches.iter().take(top_k).cloned().collect())
    }
}
