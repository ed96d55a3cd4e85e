// ── Neighbour resolution strategies ──
//
// Two controller generations expose an AP's uplink differently: older ones
// require a join against the `/data-links` listing, newer ones denormalize
// the uplink name onto the device record. Both are unified behind
// `NeighbourResolver`; the strategy comes from `NeighbourSource` in the
// config, the resolver itself is rebuilt for every poll cycle.

use std::collections::HashMap;

use uispond_api::models::{DataLinkRecord, DeviceRecord};

use crate::config::NeighbourSource;

/// Per-cycle neighbour lookup, one concrete strategy per controller shape.
pub enum NeighbourResolver {
    /// Device name → uplink name table built from the link listing.
    LinkTable(HashMap<String, String>),
    /// Read `attributes.apDevice.name` straight off each record.
    Embedded,
}

impl NeighbourResolver {
    /// Build the resolver for one poll cycle.
    ///
    /// `links` is only consulted in `DataLinks` mode; an empty slice
    /// (e.g. because the link fetch failed) resolves every neighbour to
    /// the empty string.
    pub fn new(source: NeighbourSource, links: &[DataLinkRecord]) -> Self {
        match source {
            NeighbourSource::DataLinks => {
                let mut table = HashMap::new();
                for link in links {
                    if let (Some(from), Some(to)) = (link.from_name(), link.to_name()) {
                        // First link per source wins, matching controller order.
                        table
                            .entry(from.to_owned())
                            .or_insert_with(|| to.to_owned());
                    }
                }
                Self::LinkTable(table)
            }
            NeighbourSource::DeviceAttributes => Self::Embedded,
        }
    }

    /// Uplink device name for `record`, or `""` when unresolved.
    pub fn resolve(&self, record: &DeviceRecord) -> String {
        match self {
            Self::LinkTable(table) => {
                let hostname = record.identification.hostname.as_deref().unwrap_or_default();
                table.get(hostname).cloned().unwrap_or_default()
            }
            Self::Embedded => record
                .attributes
                .ap_device
                .as_ref()
                .and_then(|ap| ap.name.clone())
                .unwrap_or_default(),
        }
    }
}
