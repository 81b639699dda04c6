use std::time::Duration;
use thiserror::Error;

/// The embedding model cannot be reached. Fatal for the retrieval path
/// only; FAQ and booking flows keep working without it.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("embedding model unavailable: {0}")]
    ModelUnavailable(String),
}

/// The generation service failed for this turn. Callers recover locally
/// with fixed fallback text; this never crosses the turn boundary.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation service error: {0}")]
    Service(String),
    #[error("generation request timed out after {0:?}")]
    Timeout(Duration),
}

/// Turns a text into a fixed-length vector. One implementation serves
/// both index build and query time, which keeps dimensions consistent.
pub trait TextEmbedder {
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbedError>> + Send;
}

/// Produces the final reply text from a prompt and a system context.
pub trait ReplyGenerator {
    fn complete(
        &self,
        prompt: &str,
        system_context: &str,
    ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send;
}
