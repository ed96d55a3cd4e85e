// UISP API response types
//
// Models for the controller's `/devices` and `/data-links` resources.
// Field presence is inconsistent across UISP versions and device roles, so
// every field is optional with `#[serde(default)]`; fields some firmware
// versions emit with the wrong JSON type go through coercing deserializers
// that degrade the single field instead of failing the record.

use serde::{Deserialize, Serialize};

// ── Lenient deserializers ────────────────────────────────────────────

pub(crate) mod lenient {
    //! Coercing deserializers for fields the controller emits inconsistently.

    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accept a float, an integer, or a numeric string. Anything else → `None`.
    pub fn f64_opt<'de, D>(de: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(de)?;
        Ok(value.as_ref().and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }))
    }

    /// Accept a non-negative integer or a numeric string. Anything else → `None`.
    pub fn u64_opt<'de, D>(de: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(de)?;
        Ok(value.as_ref().and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }))
    }

    /// Accept only strings. Anything else → `None`.
    pub fn string_opt<'de, D>(de: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(de)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
    }

    /// Deserialize a nested structure, falling back to its `Default` when
    /// the controller sent something of the wrong shape.
    pub fn or_default<'de, D, T>(de: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + DeserializeOwned,
    {
        let value = Value::deserialize(de)?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}

// ── Device ───────────────────────────────────────────────────────────

/// Device record from `GET /devices`.
///
/// UISP returns 50+ fields per device. We model the subset the normalizer
/// reads explicitly; everything else lands in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub identification: Identification,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub overview: Overview,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub attributes: Attributes,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The `identification` block shared by devices and link endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identification {
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub hostname: Option<String>,
    /// Display name; the link table joins on this.
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub mac: Option<String>,
    #[serde(
        default,
        rename = "firmwareVersion",
        deserialize_with = "lenient::string_opt"
    )]
    pub firmware_version: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub model: Option<String>,
}

/// Geolocation as configured on the controller.
///
/// Some firmware versions emit coordinates as numeric strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    pub longitude: Option<f64>,
}

/// The `overview` block with runtime statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default, deserialize_with = "lenient::u64_opt")]
    pub uptime: Option<u64>,
}

/// The `attributes` block, present on newer controller versions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attributes {
    /// Denormalized uplink AP reference (embedded neighbour variant).
    #[serde(default, rename = "apDevice", deserialize_with = "lenient::or_default")]
    pub ap_device: Option<ApDeviceRef>,
}

/// Reference to the AP a station-side device is linked to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApDeviceRef {
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_opt")]
    pub name: Option<String>,
}

// ── Data link ────────────────────────────────────────────────────────

/// Link record from `GET /data-links` (join-based neighbour variant).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataLinkRecord {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub from: LinkEndpoint,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub to: LinkEndpoint,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One side of a data link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkEndpoint {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub device: Option<LinkDevice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkDevice {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub identification: Identification,
}

impl DataLinkRecord {
    /// Source-side device name, if the link has one.
    pub fn from_name(&self) -> Option<&str> {
        self.from
            .device
            .as_ref()
            .and_then(|d| d.identification.name.as_deref())
    }

    /// Destination-side device name, if the link has one.
    pub fn to_name(&self) -> Option<&str> {
        self.to
            .device
            .as_ref()
            .and_then(|d| d.identification.name.as_deref())
    }
}
