// ── Core error types ──
//
// User-facing errors from uispond-core. Consumers never see HTTP status
// codes or JSON parse failures directly; the `From<uispond_api::Error>`
// impl translates transport-layer errors into domain-appropriate variants.
// Note that `Poller::poll` itself swallows these into an empty snapshot --
// they surface only from construction and ad-hoc API use.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Controller request timed out")]
    Timeout,

    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<uispond_api::Error> for CoreError {
    fn from(err: uispond_api::Error) -> Self {
        match err {
            uispond_api::Error::Authentication { status } => CoreError::AuthenticationFailed {
                message: format!("controller rejected the auth token (HTTP {status})"),
            },
            uispond_api::Error::InvalidToken { message } => {
                CoreError::AuthenticationFailed { message }
            }
            uispond_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            uispond_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            uispond_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            uispond_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            uispond_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
