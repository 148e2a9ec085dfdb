//! Outbound read of the upstream incidents feed.

use bytes::Bytes;
use http::header::ACCEPT;
use http::{HeaderValue, StatusCode};
use http_body_util::{BodyExt, Empty};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use tracing::debug;

use super::model::{IncidentFeed, RawIncident};
use crate::config::Config;
use crate::error::{Error, FetchError};

type HttpsClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Reads the upstream feed. One round trip per call; no retries, no cache.
///
/// The underlying client pools connections, so build one fetcher at startup
/// and share it.
pub struct IncidentFetcher {
    client: HttpsClient,
    url: http::Uri,
    api_key: HeaderValue,
}

impl IncidentFetcher {
    /// Builds the HTTPS client. Plain `http://` URLs are accepted too.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::config("WMATA_API_KEY", e.to_string()))?;
        api_key.set_sensitive(true);

        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client = Client::builder(TokioExecutor::new()).build(https);

        Ok(Self { client, url: config.incidents_url.clone(), api_key })
    }

    /// Fetches every incident currently listed upstream.
    ///
    /// A `200` with no `ElevatorIncidents` key is an empty list. Any other
    /// status is [`FetchError::Status`].
    pub async fn fetch_raw_incidents(&self) -> Result<Vec<RawIncident>, FetchError> {
        let req = http::Request::get(self.url.clone())
            .header("api_key", self.api_key.clone())
            .header(ACCEPT, "*/*")
            .body(Empty::<Bytes>::new())?;

        let res = self.client.request(req).await?;
        let status = res.status();
        debug!(url = %self.url, status = status.as_u16(), "upstream responded");

        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = res.into_body().collect().await?.to_bytes();
        let feed: IncidentFeed = serde_json::from_slice(&body)?;
        Ok(feed.into_incidents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_with_control_characters_is_rejected() {
        let config = Config::new("bad\nkey");
        assert!(matches!(
            IncidentFetcher::new(&config),
            Err(Error::Config { var: "WMATA_API_KEY", .. })
        ));
    }
}
