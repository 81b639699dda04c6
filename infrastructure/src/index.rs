use domain::models::{Passage, ScoredPassage};
use domain::providers::{EmbedError, TextEmbedder};

/// Cosine similarity `dot / (|a||b|)`. A zero-norm vector or a
/// dimension mismatch scores 0.0 instead of erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a > 0.0 && norm_b > 0.0 {
        dot / (norm_a * norm_b)
    } else {
        0.0
    }
}

struct IndexEntry {
    passage_id: usize,
    embedding: Vec<f32>,
}

/// In-memory list of (passage, vector) pairs. Built once at startup,
/// read-only afterwards; queries are a linear scan, which is plenty for
/// the tens-to-hundreds of passages this corpus holds.
pub struct SimilarityIndex {
    entries: Vec<IndexEntry>,
}

impl SimilarityIndex {
    /// Embed every passage once; O(n) in the number of passages.
    pub async fn build<E: TextEmbedder>(
        passages: &[Passage],
        embedder: &E,
    ) -> Result<Self, EmbedError> {
        let mut entries = Vec::with_capacity(passages.len());
        for passage in passages {
            let embedding = embedder.embed(&passage.text).await?;
            entries.push(IndexEntry {
                passage_id: passage.id,
                embedding,
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// At most `k` results with score >= `min_score`, sorted descending.
    /// The sort is stable, so equal scores keep original passage order.
    pub fn query(&self, vector: &[f32], k: usize, min_score: f32) -> Vec<ScoredPassage> {
        let mut scored: Vec<ScoredPassage> = self
            .entries
            .iter()
            .map(|entry| ScoredPassage {
                passage_id: entry.passage_id,
                score: cosine_similarity(vector, &entry.embedding),
            })
            .filter(|result| result.score >= min_score)
            .collect();
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);
        scored
    }
}
