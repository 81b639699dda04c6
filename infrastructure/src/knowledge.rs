use anyhow::Context;
use domain::models::Passage;
use shared::types::Result;
use std::fs;
use std::path::Path;

/// Read the whole knowledge file. A missing file is fatal at startup
/// and reported to the operator.
pub fn load_knowledge(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("knowledge base file not found: {}", path.display()))
}

/// Blank-line-delimited paragraphs, trimmed, with empty segments
/// dropped. Lazy and restartable; empty input yields an empty iterator.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}

/// Assign ordinal ids; the first line of each paragraph names its
/// section for display purposes.
pub fn build_passages(text: &str) -> Vec<Passage> {
    paragraphs(text)
        .enumerate()
        .map(|(id, body)| Passage {
            id,
            text: body.to_string(),
            source_section: body.lines().next().unwrap_or_default().trim().to_string(),
        })
        .collect()
}
