// ── Runtime connection configuration ──
//
// These types describe *how* to reach a UISP controller and how neighbours
// are resolved. They carry credential data and connection tuning, but never
// touch disk. The CLI constructs a `UispConfig` and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use strum::{Display, EnumString};
use url::Url;

use uispond_api::{TlsMode, TransportConfig};

/// Which controller shape supplies an access point's uplink neighbour.
///
/// Older controllers require a join against `/data-links`; newer ones
/// denormalize the uplink name onto the device record itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum NeighbourSource {
    /// Join the device hostname against the `/data-links` listing.
    #[default]
    DataLinks,
    /// Read the embedded `attributes.apDevice.name` off each record.
    DeviceAttributes,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (self-signed controllers).
    DangerAcceptInvalid,
}

/// Configuration for polling a single controller.
///
/// Built by the CLI, passed to [`crate::Poller`] -- core never reads
/// config files.
#[derive(Debug, Clone)]
pub struct UispConfig {
    /// Controller API base URL
    /// (e.g., `https://uisp.example.com/nms/api/v2.1`).
    pub url: Url,
    /// Auth token, sent as `X-Auth-Token` on every request.
    pub token: SecretString,
    /// Neighbour resolution strategy.
    pub neighbour_source: NeighbourSource,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout. A hung controller read fails the cycle instead
    /// of hanging it.
    pub timeout: Duration,
}

impl UispConfig {
    /// Translate the connection tuning into an api-level transport config.
    pub fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
