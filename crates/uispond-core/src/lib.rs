//! Translation layer between `uispond-api` and node-info consumers.
//!
//! This crate owns the domain model and the poll pipeline:
//!
//! - **[`Poller`]** — one best-effort snapshot per call: fetch the device
//!   listing (and the link listing in join mode), normalize each record,
//!   return the collection. Upstream failures degrade to an empty
//!   collection and are logged; [`Poller::poll`] never fails.
//!
//! - **[`AccessPoint`]** — the normalized entity handed to the responder.
//!   Every field has a safe default; missing or malformed controller data
//!   degrades a single field, never the record or the collection.
//!
//! - **[`NeighbourResolver`]** — unifies the two controller generations'
//!   uplink shapes (link-table join vs. embedded attribute) behind one
//!   interface, selected by [`NeighbourSource`] in the config.
//!
//! - **[`UispConfig`]** — explicit runtime configuration built by the
//!   binary and passed in; core never reads config files or globals.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod neighbour;
pub mod poller;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{NeighbourSource, TlsVerification, UispConfig};
pub use error::CoreError;
pub use model::{AccessPoint, FALLBACK_DOMAIN_CODE, MacAddress};
pub use neighbour::NeighbourResolver;
pub use poller::Poller;
