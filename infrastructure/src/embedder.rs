use anyhow::ensure;
use domain::models::{Embedding, TextSegment};
use domain::providers::EmbeddingProvider;
use shared::types::Result;

const BATCH_SIZE: usize = 32;

/// Runs corpus segments through an embedding provider in batches and pairs
/// each segment with its vector.
pub struct Embedder<P> {
    provider: P,
}

impl<P: EmbeddingProvider> Embedder<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn embed_segments(
        &self,
        source: &str,
        segments: &[TextSegment],
    ) -> Result<Vec<Embedding>> {
        let mut embeddings = Vec::with_capacity(segments.len());
        for batch in segments.chunks(BATCH_SIZE) {
            eprintln!("Embedding {} segments...", batch.len());
            let texts: Vec<String> = batch.iter().map(|s| s.text.clone()).collect();
            let vectors = self.provider.embed(&texts).await?;
            ensure!(
                vectors.len() == batch.len(),
                "embedding provider returned {} vectors for {} segments",
                vectors.len(),
                batch.len()
            );
            for (segment, vector) in batch.iter().zip(vectors) {
                embeddings.push(Embedding {
                    id: format!("{}:{}", source, segment.index),
                    vector,
                    text: segment.text.clone(),
                });
            }
        }
        Ok(embeddings)
    }
}
