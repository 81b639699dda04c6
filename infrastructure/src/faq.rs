use anyhow::Context;
use domain::models::FaqEntry;
use serde::Deserialize;
use shared::types::Result;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct FaqFile {
    faqs: Vec<FaqEntry>,
}

/// Load the FAQ table once at startup; read-only afterwards. A missing
/// or malformed file is fatal and reported to the operator.
pub fn load_faqs(path: impl AsRef<Path>) -> Result<Vec<FaqEntry>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("faq file not found: {}", path.display()))?;
    let parsed: FaqFile =
        serde_json::from_str(&raw).with_context(|| format!("invalid faq file: {}", path.display()))?;
    Ok(parsed.faqs)
}
