// ── Domain model ──
//
// The normalized shapes handed to node-info consumers. Raw controller
// records (`uispond_api::models`) never leave the poll pipeline.

pub mod accesspoint;
pub mod mac;

pub use accesspoint::{AccessPoint, FALLBACK_DOMAIN_CODE};
pub use mac::MacAddress;
