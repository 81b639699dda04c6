use domain::models::Passage;
use domain::providers::TextEmbedder;
use infrastructure::index::SimilarityIndex;
use shared::utils::normalize_text;

/// Retrieval over the knowledge passages. The semantic index is built
/// once at startup; when the embedding model is unavailable the service
/// degrades to a keyword-overlap scan instead of failing the turn.
pub struct RagService<E> {
    embedder: E,
    passages: Vec<Passage>,
    index: Option<SimilarityIndex>,
    max_chunks: usize,
    min_score: f32,
}

impl<E: TextEmbedder> RagService<E> {
    pub fn new(passages: Vec<Passage>, embedder: E, max_chunks: usize, min_score: f32) -> Self {
        Self {
            embedder,
            passages,
            index: None,
            max_chunks,
            min_score,
        }
    }

    /// Embed every passage once. On failure the index stays unbuilt and
    /// retrieval runs on the keyword path; FAQ and booking are untouched.
    pub async fn build_index(&mut self) {
        match SimilarityIndex::build(&self.passages, &self.embedder).await {
            Ok(index) => self.index = Some(index),
            Err(err) => {
                tracing::warn!("embedding unavailable, keyword retrieval only: {err}");
            }
        }
    }

    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    pub fn index_ready(&self) -> bool {
        self.index.is_some()
    }

    /// Top passages for a query: never more than `k`, empty when nothing
    /// clears `min_score`.
    pub async fn retrieve(&self, query: &str, k: usize, min_score: f32) -> Vec<&Passage> {
        if let Some(index) = &self.index {
            match self.embedder.embed(query).await {
                Ok(vector) => {
                    return index
                        .query(&vector, k, min_score)
                        .into_iter()
                        // Passage ids are ordinal, assigned at chunking.
                        .filter_map(|result| self.passages.get(result.passage_id))
                        .collect();
                }
                Err(err) => {
                    tracing::warn!("query embedding failed, falling back to keywords: {err}");
                }
            }
        }
        self.keyword_retrieve(query, k)
    }

    /// Overlap scan used when embeddings are down: score is the share of
    /// query words found in the passage, zero-match passages dropped.
    fn keyword_retrieve(&self, query: &str, k: usize) -> Vec<&Passage> {
        let normalized = normalize_text(query);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        if words.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f32, &Passage)> = self
            .passages
            .iter()
            .filter_map(|passage| {
                let haystack = passage.text.to_lowercase();
                let matches = words.iter().filter(|word| haystack.contains(**word)).count();
                if matches == 0 {
                    return None;
                }
                Some((matches as f32 / words.len() as f32, passage))
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(k).map(|(_, p)| p).collect()
    }

    /// Concatenated context for prompting, or None when retrieval comes
    /// back empty.
    pub async fn context_for(&self, query: &str) -> Option<String> {
        let hits = self.retrieve(query, self.max_chunks, self.min_score).await;
        if hits.is_empty() {
            return None;
        }
        Some(
            hits.iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n\n"),
        )
    }
}
