//! The `/incidents/{unit_type}` endpoint and the application router.

use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, error, warn};

use super::fetch::IncidentFetcher;
use super::filter::filter_incidents;
use crate::error::FetchError;
use crate::{Request, Response, Router, Status, health};

/// Composes fetch, filter and render for one request.
pub struct IncidentService {
    fetcher: IncidentFetcher,
}

/// Body entry reported in place of incidents when the upstream read fails.
#[derive(Serialize)]
struct FetchFailure {
    error: String,
}

impl IncidentService {
    pub fn new(fetcher: IncidentFetcher) -> Self {
        Self { fetcher }
    }

    /// Answers `GET /incidents/{unit_type}`.
    ///
    /// Always `200 OK`. An upstream failure is reported as a one-element
    /// array holding an `error` object; an unknown `unit_type` is `[]`.
    pub async fn incidents(&self, unit_type: &str) -> Response {
        let rendered = match self.fetcher.fetch_raw_incidents().await {
            Ok(raw) => {
                let summaries = filter_incidents(&raw, unit_type);
                debug!(unit_type, upstream = raw.len(), matched = summaries.len(), "filtered incidents");
                to_pretty_json(&summaries)
            }
            Err(e) => {
                warn!(unit_type, error = %e, "failed to retrieve incidents");
                to_pretty_json(&[failure_entry(&e)])
            }
        };

        match rendered {
            Ok(body) => Response::json(body),
            Err(e) => {
                error!(error = %e, "failed to serialize incidents");
                Response::status(Status::InternalServerError)
            }
        }
    }
}

fn failure_entry(err: &FetchError) -> FetchFailure {
    FetchFailure { error: format!("Failed to retrieve incidents ({err})") }
}

/// JSON with four-space indentation.
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Every route the proxy serves.
pub fn app(service: Arc<IncidentService>) -> Router {
    Router::new()
        .get("/incidents/{unit_type}", move |req: Request| {
            let service = Arc::clone(&service);
            async move { service.incidents(req.param("unit_type").unwrap_or_default()).await }
        })
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incidents::IncidentSummary;

    #[test]
    fn status_failure_message_carries_the_code() {
        let entry = failure_entry(&FetchError::Status(503));
        assert_eq!(entry.error, "Failed to retrieve incidents (HTTP 503)");
    }

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let summaries = [IncidentSummary {
            station_code: "A01".into(),
            station_name: "Metro Center".into(),
            unit_name: "E01".into(),
            unit_type: "ELEVATOR".into(),
        }];
        let out = String::from_utf8(to_pretty_json(&summaries[..]).unwrap()).unwrap();
        assert_eq!(
            out,
            "[\n    {\n        \"StationCode\": \"A01\",\n        \"StationName\": \"Metro Center\",\n        \"UnitName\": \"E01\",\n        \"UnitType\": \"ELEVATOR\"\n    }\n]"
        );
    }

    #[test]
    fn empty_result_renders_as_bare_brackets() {
        let none: Vec<IncidentSummary> = Vec::new();
        assert_eq!(to_pretty_json(&none).unwrap(), b"[]");
    }

    #[test]
    fn failure_renders_as_single_element_array() {
        let out = to_pretty_json(&[failure_entry(&FetchError::Status(500))]).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([{"error": "Failed to retrieve incidents (HTTP 500)"}]));
    }
}
