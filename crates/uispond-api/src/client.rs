// Hand-crafted async HTTP client for the UISP controller REST API.
//
// Auth: X-Auth-Token header on every request.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::{DataLinkRecord, DeviceRecord};
use crate::transport::TransportConfig;

// ── Error response shape from the controller ─────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the UISP controller API.
///
/// Token-authenticated JSON reads against the controller's device and
/// data-link listings. No retries, no rate limiting; the request timeout
/// comes from [`TransportConfig`].
pub struct UispClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UispClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an auth token and transport config.
    ///
    /// Injects `X-Auth-Token` as a sensitive default header on every
    /// request. `base_url` should be the controller's API root, e.g.
    /// `https://uisp.example.com/nms/api/v2.1`.
    pub fn from_token(
        base_url: &str,
        token: &secrecy::SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut token_value =
            HeaderValue::from_str(token.expose_secret()).map_err(|e| Error::InvalidToken {
                message: format!("invalid auth token header value: {e}"),
            })?;
        token_value.set_sensitive(true);
        headers.insert("X-Auth-Token", token_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = Self::normalize_base_url(base_url)?;

        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Parse the base URL and guarantee a trailing slash so relative
    /// joins append instead of replacing the last path segment.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"devices"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/`, so joining a relative path works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── Request handling ─────────────────────────────────────────────

    /// GET a JSON list resource.
    ///
    /// The body is decoded element by element: a single malformed element
    /// degrades to an all-defaults record instead of discarding the list.
    async fn get_list<T>(&self, path: &str) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.parse_error(status, resp).await);
        }

        let body = resp.text().await?;
        let elements: Vec<serde_json::Value> = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })?;

        Ok(elements
            .into_iter()
            .map(|element| {
                serde_json::from_value(element).unwrap_or_else(|e| {
                    warn!(error = %e, "malformed list element degraded to defaults");
                    T::default()
                })
            })
            .collect())
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Error::Authentication {
                status: status.as_u16(),
            };
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// List every device the controller manages.
    pub async fn list_devices(&self) -> Result<Vec<DeviceRecord>, Error> {
        self.get_list("devices").await
    }

    /// List every data link between managed devices.
    pub async fn list_data_links(&self) -> Result<Vec<DataLinkRecord>, Error> {
        self.get_list("data-links").await
    }
}
