use serde::{Deserialize, Serialize};

/// One retrievable unit of knowledge-base text. Immutable once the index
/// is built; never persisted across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: usize,
    pub text: String,
    pub source_section: String,
}

/// A passage reference scored against a query embedding. Ephemeral,
/// produced per request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredPassage {
    pub passage_id: usize,
    pub score: f32,
}

/// A single FAQ record, read-only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}
