use thiserror::Error;

/// Failure taxonomy for the panel. The controller collapses every variant
/// into the same user-visible error state; the variants exist so logs and
/// tests can tell the causes apart.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required page element was absent at startup. Fatal for the
    /// controller; the id is one of the constants in [`crate::view`].
    #[error("Missing page element: #{0}")]
    MissingElement(&'static str),

    /// The generation request could not be completed at the transport level.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status. No distinction is
    /// made between 4xx and 5xx.
    #[error("Generation service returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON or lacked `image_url`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The generated image could not be fetched or was empty.
    #[error("Image load failed: {0}")]
    ImageLoad(String),

    #[error("Download failed: {0}")]
    Download(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
