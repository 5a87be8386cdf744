pub mod http;

pub use http::HttpGenerationService;

use crate::{
    error::Result,
    models::{FormData, GenerateResponse},
};
use async_trait::async_trait;

/// The remote side of the panel: one call that runs a generation and one
/// that materializes an image source into bytes. The two calls are the two
/// suspension points of the submit pipeline — network completion, then
/// image load.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Submits the form to the generation endpoint and parses the payload.
    async fn generate(&self, form: &FormData) -> Result<GenerateResponse>;

    /// Resolves an image source to its bytes. Sources may be relative to
    /// the service, absolute URLs, or inline `data:image/png` payloads.
    async fn load_image(&self, src: &str) -> Result<Vec<u8>>;
}
