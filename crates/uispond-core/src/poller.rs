// ── Poll cycle ──
//
// One poll = one or two sequential controller reads followed by in-memory
// normalization. Best effort: any upstream failure degrades to an empty
// collection (or an empty neighbour table) for this cycle; nothing
// propagates to the caller. No state survives between cycles.

use tracing::{debug, warn};

use uispond_api::UispClient;

use crate::config::{NeighbourSource, UispConfig};
use crate::convert;
use crate::error::CoreError;
use crate::model::AccessPoint;
use crate::neighbour::NeighbourResolver;

/// Takes best-effort snapshots of the controller's access points.
///
/// Holds no mutable state; concurrent polls are as safe as the underlying
/// `reqwest::Client`, though one poll at a time is the intended use.
pub struct Poller {
    client: UispClient,
    neighbour_source: NeighbourSource,
}

impl Poller {
    /// Build a poller from runtime config.
    pub fn new(config: &UispConfig) -> Result<Self, CoreError> {
        let client =
            UispClient::from_token(config.url.as_str(), &config.token, &config.transport())?;
        Ok(Self {
            client,
            neighbour_source: config.neighbour_source,
        })
    }

    /// Wrap an existing client (tests, custom transports).
    pub fn with_client(client: UispClient, neighbour_source: NeighbourSource) -> Self {
        Self {
            client,
            neighbour_source,
        }
    }

    /// Take one snapshot of the controller's access points.
    ///
    /// Never fails: a transport, auth, or decode error on the device
    /// listing empties this cycle's collection; the same on the link
    /// listing leaves every neighbour unresolved. Both are logged.
    pub async fn poll(&self) -> Vec<AccessPoint> {
        let devices = match self.client.list_devices().await {
            Ok(devices) => devices,
            Err(err) => {
                warn!(error = %err, "device listing failed; empty collection this cycle");
                return Vec::new();
            }
        };

        let links = match self.neighbour_source {
            NeighbourSource::DataLinks => match self.client.list_data_links().await {
                Ok(links) => links,
                Err(err) => {
                    warn!(error = %err, "data-link listing failed; neighbours unresolved this cycle");
                    Vec::new()
                }
            },
            NeighbourSource::DeviceAttributes => Vec::new(),
        };

        let resolver = NeighbourResolver::new(self.neighbour_source, &links);
        let access_points: Vec<AccessPoint> = devices
            .iter()
            .filter_map(|record| convert::normalize(record, &resolver))
            .collect();

        debug!(
            fetched = devices.len(),
            kept = access_points.len(),
            "poll cycle complete"
        );
        access_points
    }
}
