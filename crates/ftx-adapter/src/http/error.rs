/*
[INPUT]:  Error sources (transport, HTTP status, API envelope, serde, local checks)
[OUTPUT]: Structured error type with cause chain and classification helpers
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the FTX adapter
#[derive(Error, Debug)]
pub enum FtxError {
    /// Client is missing something it needs, e.g. credentials for a private endpoint
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The HTTP exchange could not complete (connect, TLS, read)
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("HTTP status {status}: {body}")]
    Protocol { status: u16, body: String },

    /// Envelope reported `success: false`
    #[error("API error: {message}")]
    Api { message: String },

    /// Response did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A local precondition failed before any request was built
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Timestamp was neither epoch seconds nor ISO-8601
    #[error("Invalid timestamp format: {0}")]
    Format(String),

    /// A parameter record or body could not be rendered
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl FtxError {
    /// The exchange understood the request and rejected it
    pub fn is_api_error(&self) -> bool {
        matches!(self, FtxError::Api { .. })
    }

    /// The network or the server side failed (no response, or a 5xx)
    pub fn is_transport_error(&self) -> bool {
        match self {
            FtxError::Transport(_) => true,
            FtxError::Protocol { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The exchange turned the request down, in the envelope or with a 4xx
    pub fn is_rejected(&self) -> bool {
        match self {
            FtxError::Api { .. } => true,
            FtxError::Protocol { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// The request was malformed on our side and never reached the exchange
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FtxError::Configuration(_)
                | FtxError::Validation(_)
                | FtxError::Encoding(_)
                | FtxError::Format(_)
                | FtxError::UrlParse(_)
        )
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            FtxError::Protocol { status, .. } => Some(*status),
            FtxError::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn missing_credentials(path: &str) -> Self {
        FtxError::Configuration(format!("credentials required for authenticated endpoint {path}"))
    }
}

/// Result type alias for FTX operations
pub type Result<T> = std::result::Result<T, FtxError>;
