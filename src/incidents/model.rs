//! Upstream and outbound incident records.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One record of the upstream `ElevatorIncidents` array.
///
/// Only the four fields this proxy re-serves are kept; everything else the
/// feed sends (`SymptomDescription`, `DateOutOfServ`, ...) is ignored.
/// Missing and `null` values read as the empty string. Numbers and booleans
/// read as their JSON text; arrays and objects as the empty string. One odd
/// record never fails the whole feed.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct RawIncident {
    #[serde(rename = "StationCode", default, deserialize_with = "lenient_string")]
    pub station_code: String,
    #[serde(rename = "StationName", default, deserialize_with = "lenient_string")]
    pub station_name: String,
    #[serde(rename = "UnitName", default, deserialize_with = "lenient_string")]
    pub unit_name: String,
    #[serde(rename = "UnitType", default, deserialize_with = "lenient_string")]
    pub unit_type: String,
}

/// The upstream response envelope.
#[derive(Debug, Default, Deserialize)]
pub struct IncidentFeed {
    #[serde(rename = "ElevatorIncidents", default)]
    pub elevator_incidents: Option<Vec<RawIncident>>,
}

impl IncidentFeed {
    pub fn into_incidents(self) -> Vec<RawIncident> {
        self.elevator_incidents.unwrap_or_default()
    }
}

/// What the proxy returns per incident. Serializes with keys in declaration
/// order.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct IncidentSummary {
    #[serde(rename = "StationCode")]
    pub station_code: String,
    #[serde(rename = "StationName")]
    pub station_name: String,
    #[serde(rename = "UnitName")]
    pub unit_name: String,
    #[serde(rename = "UnitType")]
    pub unit_type: String,
}

impl From<&RawIncident> for IncidentSummary {
    fn from(raw: &RawIncident) -> Self {
        Self {
            station_code: raw.station_code.clone(),
            station_name: raw.station_name.clone(),
            unit_name: raw.unit_name.clone(),
            unit_type: raw.unit_type.clone(),
        }
    }
}

/// The unit categories a caller can ask for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Category {
    Elevators,
    Escalators,
}

impl Category {
    /// Case-insensitive; anything other than `elevators` or `escalators` is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "elevators" => Some(Self::Elevators),
            "escalators" => Some(Self::Escalators),
            _ => None,
        }
    }

    /// The lowercase `UnitType` value upstream uses for this category.
    pub fn unit_type(self) -> &'static str {
        match self {
            Self::Elevators => "elevator",
            Self::Escalators => "escalator",
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_incident_defaults_missing_and_null_fields() {
        let raw: RawIncident = serde_json::from_str(
            r#"{"StationCode":"A01","StationName":null,"UnitType":"ESCALATOR","DisplayOrder":0}"#,
        )
        .unwrap();
        assert_eq!(raw.station_code, "A01");
        assert_eq!(raw.station_name, "");
        assert_eq!(raw.unit_name, "");
        assert_eq!(raw.unit_type, "ESCALATOR");
    }

    #[test]
    fn non_string_fields_do_not_fail_the_feed() {
        let feed: IncidentFeed = serde_json::from_str(
            r#"{"ElevatorIncidents":[
                {"StationCode":"A01","StationName":"Metro Center","UnitName":"E01","UnitType":"ELEVATOR"},
                {"StationCode":7,"StationName":true,"UnitName":["x"],"UnitType":{"k":1}}
            ]}"#,
        )
        .unwrap();
        let incidents = feed.into_incidents();
        assert_eq!(incidents.len(), 2);
        assert_eq!(incidents[0].station_code, "A01");
        assert_eq!(incidents[1].station_code, "7");
        assert_eq!(incidents[1].station_name, "true");
        assert_eq!(incidents[1].unit_name, "");
        assert_eq!(incidents[1].unit_type, "");
    }

    #[test]
    fn feed_without_incidents_is_empty() {
        let missing: IncidentFeed = serde_json::from_str("{}").unwrap();
        assert!(missing.into_incidents().is_empty());

        let null: IncidentFeed = serde_json::from_str(r#"{"ElevatorIncidents":null}"#).unwrap();
        assert!(null.into_incidents().is_empty());
    }

    #[test]
    fn summary_serializes_keys_in_fixed_order() {
        let summary = IncidentSummary {
            station_code: "A01".into(),
            station_name: "Metro Center".into(),
            unit_name: "E01".into(),
            unit_type: "ELEVATOR".into(),
        };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"StationCode":"A01","StationName":"Metro Center","UnitName":"E01","UnitType":"ELEVATOR"}"#
        );
    }

    #[test]
    fn category_parse_ignores_case() {
        assert_eq!(Category::parse("Elevators"), Some(Category::Elevators));
        assert_eq!(Category::parse("ESCALATORS"), Some(Category::Escalators));
        assert_eq!(Category::parse("elevator"), None);
        assert_eq!(Category::parse("ramps"), None);
        assert_eq!(Category::Escalators.unit_type(), "escalator");
    }
}
