// uispond-api: Async Rust client for the UISP controller REST API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::UispClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
