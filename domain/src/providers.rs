//! Capability seams for the external services the pipeline depends on.
//! Concrete backends live in the infrastructure crate; tests substitute
//! in-memory implementations.

use crate::models::SegmentMatch;
use shared::types::Result;

/// Turns text into fixed-length vectors, one per input.
pub trait EmbeddingProvider {
    fn embed(
        &self,
        texts: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<Vec<f32>>>> + Send;
}

/// Finds the segments most similar to a natural-language query.
pub trait Retriever {
    fn retrieve(
        &self,
        query: &str,
        top_k: usize,
    ) -> impl std::future::Future<Output = Result<Vec<SegmentMatch>>> + Send;
}

/// Produces text from a fully composed prompt.
pub trait Generator {
    fn generate(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}
