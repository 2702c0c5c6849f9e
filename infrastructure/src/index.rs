use anyhow::anyhow;
use domain::models::{Embedding, SegmentMatch};
use domain::providers::{EmbeddingProvider, Retriever};
use shared::types::Result;

/// In-memory similarity index over the embedded corpus. Read-only after
/// construction; nothing is persisted.
pub struct VectorIndex {
    entries: Vec<Embedding>,
}

impl VectorIndex {
    pub fn build(entries: Vec<Embedding>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn search(&self, query: &[f32], top_k: usize) -> Vec<SegmentMatch> {
        let mut matches: Vec<SegmentMatch> = self
            .entries
            .iter()
            .map(|entry| SegmentMatch {
                id: entry.id.clone(),
                text: entry.text.clone(),
                score: cosine_similarity(query, &entry.vector),
            })
            .collect();
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(top_k);
        matches
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot_product / (norm_a * norm_b)
}

/// Retrieval capability over the index: embeds the query, then searches.
pub struct SemanticRetriever<P> {
    index: VectorIndex,
    provider: P,
}

impl<P> SemanticRetriever<P> {
    pub fn new(index: VectorIndex, provider: P) -> Self {
        Self { index, provider }
    }
}

impl<P: EmbeddingProvider + Sync> Retriever for SemanticRetriever<P> {
    async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<SegmentMatch>> {
        let query_input = [query.to_string()];
        let vectors = self.provider.embed(&query_input).await?;
        let query_vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("embedding provider returned no vector for the query"))?;
        Ok(self.index.search(&query_vector, top_k))
    }
}
