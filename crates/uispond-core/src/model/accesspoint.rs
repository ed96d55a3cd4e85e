// ── Access point domain type ──

use serde::{Deserialize, Serialize};

use super::mac::MacAddress;

/// Classification tag attached to every entity produced by this pipeline.
///
/// Downstream node-info consumers use it to recognize entries that came
/// from the UISP fallback provider rather than a native node-info source.
pub const FALLBACK_DOMAIN_CODE: &str = "uisp_respondd_fallback";

/// Normalized access point, shaped for the node-info responder.
///
/// Every field has a safe default (empty string, zero): missing or
/// malformed controller data degrades the single field, never the record
/// or the collection. Duplicate MACs are possible and passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    /// Hostname as configured on the controller.
    pub name: String,
    /// Hardware MAC; empty when the controller did not report one.
    pub mac: MacAddress,
    pub latitude: f64,
    pub longitude: f64,
    /// Name of the directly linked uplink device; empty when unresolved.
    pub neighbour: String,
    /// Fixed tag marking this entry as fallback-sourced.
    pub domain_code: String,
    pub firmware: String,
    pub model: String,
    /// Uptime in seconds; 0 when the controller did not report one.
    pub uptime_secs: u64,
}
