//! HTTP client for the football-data.org v4 API.

use crate::config::ApiConfig;
use crate::error::{EtlError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;


/// Header carrying the football-data.org API key.
pub const AUTH_HEADER: &str = "x-auth-token";

const USER_AGENT: &str = concat!("football-etl/", env!("CARGO_PKG_VERSION"));

/// Thin GET-only client bound to one base URL and token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// Fails when the base URL does not parse or the token is not a valid
    /// header value; both are setup failures for the run.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let headers = build_headers(&config.token)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url,
            headers,
        })
    }

    /// `{base}/v4/competitions`
    pub fn competitions_url(&self) -> String {
        format!("{}/v4/competitions", self.base())
    }

    /// `{base}/v4/competitions/{code}/teams`
    pub fn teams_url(&self, code: &str) -> String {
        format!("{}/v4/competitions/{}/teams", self.base(), code)
    }

    /// GET `url` with the auth headers.
    ///
    /// Returns the parsed body on HTTP 200 and [`EtlError::Status`] for any
    /// other status code.
    pub async fn fetch(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");

        let response = self
            .http
            .get(url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(EtlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| EtlError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(EtlError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }

    Ok(url)
}

fn build_headers(token: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut value = HeaderValue::from_str(token)?;
    value.set_sensitive(true);
    h.insert(HeaderName::from_static(AUTH_HEADER), value);

    Ok(h)
}
