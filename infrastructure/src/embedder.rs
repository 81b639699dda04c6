use domain::providers::{EmbedError, TextEmbedder};

use crate::gemini::GeminiClient;

/// Embedding adapter over the hosted embedding model. Stateless beyond
/// the HTTP client handle; the same adapter embeds passages at index
/// build and queries at turn time.
pub struct GeminiEmbedder {
    client: GeminiClient,
}

impl GeminiEmbedder {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl TextEmbedder for GeminiEmbedder {
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbedError>> + Send {
        async move {
            self.client
                .embed_text(text)
                .await
                .map_err(|err| EmbedError::ModelUnavailable(err.to_string()))
        }
    }
}
