use thiserror::Error;

/// Top-level error type for the `uispond-api` crate.
///
/// Covers every failure mode of the controller read path: authentication,
/// transport, and response decoding. `uispond-core` maps these into
/// domain-level variants; the poller additionally degrades them to an
/// empty snapshot rather than surfacing them to its caller.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Controller rejected the auth token (401/403).
    #[error("Authentication rejected by controller (HTTP {status})")]
    Authentication { status: u16 },

    /// The configured token cannot be sent as a header value.
    #[error("Invalid auth token: {message}")]
    InvalidToken { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Controller API ──────────────────────────────────────────────
    /// Non-success status from the controller, with its message if the
    /// body carried one.
    #[error("Controller API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the auth token is bad and a
    /// config fix (not a retry) is needed.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication { .. } | Self::InvalidToken { .. })
    }

    /// Returns `true` if this is a transient error a later poll cycle
    /// might not hit.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
