// ── Record normalization ──
//
// Maps raw controller device records into `AccessPoint` entities. Every
// field is an independent fallible lookup: a missing or malformed sub-path
// degrades that one field to its default and the rest of the record is
// unaffected.

use uispond_api::models::DeviceRecord;

use crate::model::{AccessPoint, FALLBACK_DOMAIN_CODE, MacAddress};
use crate::neighbour::NeighbourResolver;

/// Substring marking a record as a router by naming convention.
///
/// Case-sensitive and literal: a hostname like "RouterRoom-AP" is excluded
/// too. This mirrors the controller-side naming convention, not a
/// device-type field.
const ROUTER_MARKER: &str = "Router";

// ── Per-field extraction ────────────────────────────────────────────

fn hostname(record: &DeviceRecord) -> &str {
    record.identification.hostname.as_deref().unwrap_or_default()
}

fn mac(record: &DeviceRecord) -> MacAddress {
    record
        .identification
        .mac
        .as_deref()
        .map(MacAddress::new)
        .unwrap_or_default()
}

fn coordinates(record: &DeviceRecord) -> (f64, f64) {
    let location = record.location.as_ref();
    (
        location.and_then(|l| l.latitude).unwrap_or_default(),
        location.and_then(|l| l.longitude).unwrap_or_default(),
    )
}

fn firmware(record: &DeviceRecord) -> String {
    record
        .identification
        .firmware_version
        .clone()
        .unwrap_or_default()
}

fn model(record: &DeviceRecord) -> String {
    record.identification.model.clone().unwrap_or_default()
}

fn uptime_secs(record: &DeviceRecord) -> u64 {
    record.overview.uptime.unwrap_or_default()
}

// ── Normalizer ──────────────────────────────────────────────────────

/// Normalize one raw record.
///
/// Returns `None` for records excluded by the router naming filter; every
/// other record yields exactly one `AccessPoint`.
pub fn normalize(record: &DeviceRecord, neighbours: &NeighbourResolver) -> Option<AccessPoint> {
    let name = hostname(record);
    if name.contains(ROUTER_MARKER) {
        return None;
    }

    let (latitude, longitude) = coordinates(record);

    Some(AccessPoint {
        name: name.to_owned(),
        mac: mac(record),
        latitude,
        longitude,
        neighbour: neighbours.resolve(record),
        domain_code: FALLBACK_DOMAIN_CODE.to_owned(),
        firmware: firmware(record),
        model: model(record),
        uptime_secs: uptime_secs(record),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use serde_json::json;

    use crate::config::NeighbourSource;

    use super::*;

    fn embedded() -> NeighbourResolver {
        NeighbourResolver::new(NeighbourSource::DeviceAttributes, &[])
    }

    fn record(value: serde_json::Value) -> DeviceRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn well_formed_record_normalizes() {
        let ap = normalize(
            &record(json!({
                "identification": {
                    "hostname": "AP-Roof",
                    "mac": "AA:BB:CC:DD:EE:FF",
                    "firmwareVersion": "8.7.4",
                    "model": "LAP-120"
                },
                "location": { "latitude": 50.11, "longitude": 8.68 },
                "overview": { "uptime": 86400 }
            })),
            &embedded(),
        )
        .unwrap();

        assert_eq!(ap.name, "AP-Roof");
        assert_eq!(ap.mac.as_str(), "aa:bb:cc:dd:ee:ff");
        assert_eq!(ap.latitude, 50.11);
        assert_eq!(ap.longitude, 8.68);
        assert_eq!(ap.firmware, "8.7.4");
        assert_eq!(ap.model, "LAP-120");
        assert_eq!(ap.uptime_secs, 86_400);
        assert_eq!(ap.domain_code, FALLBACK_DOMAIN_CODE);
    }

    #[test]
    fn router_hostnames_are_excluded() {
        let resolver = embedded();
        for name in ["RouterMain", "Router", "RouterRoom-AP", "CoreRouter-1"] {
            let r = record(json!({ "identification": { "hostname": name } }));
            assert!(normalize(&r, &resolver).is_none(), "{name} should be excluded");
        }
    }

    #[test]
    fn router_filter_is_case_sensitive() {
        let resolver = embedded();
        // Lowercase "router" does not match the convention.
        let r = record(json!({ "identification": { "hostname": "router-basement" } }));
        assert!(normalize(&r, &resolver).is_some());
    }

    #[test]
    fn non_router_hostnames_pass() {
        let r = record(json!({ "identification": { "hostname": "AP-Roof" } }));
        assert_eq!(normalize(&r, &embedded()).unwrap().name, "AP-Roof");
    }

    #[test]
    fn missing_location_defaults_to_zero() {
        let ap = normalize(
            &record(json!({ "identification": { "hostname": "AP-NoGeo" } })),
            &embedded(),
        )
        .unwrap();

        assert_eq!(ap.latitude, 0.0);
        assert_eq!(ap.longitude, 0.0);
    }

    #[test]
    fn string_latitude_is_coerced() {
        let ap = normalize(
            &record(json!({
                "identification": { "hostname": "AP-Stringy" },
                "location": { "latitude": "12.5" }
            })),
            &embedded(),
        )
        .unwrap();

        assert_eq!(ap.latitude, 12.5);
        assert_eq!(ap.longitude, 0.0);
    }

    #[test]
    fn empty_record_still_yields_defaults() {
        let ap = normalize(&DeviceRecord::default(), &embedded()).unwrap();

        assert_eq!(ap.name, "");
        assert!(ap.mac.is_empty());
        assert_eq!(ap.latitude, 0.0);
        assert_eq!(ap.neighbour, "");
        assert_eq!(ap.uptime_secs, 0);
        assert_eq!(ap.domain_code, FALLBACK_DOMAIN_CODE);
    }
}
