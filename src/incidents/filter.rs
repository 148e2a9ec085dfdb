//! Category filtering.

use super::model::{Category, IncidentSummary, RawIncident};

/// Keeps the incidents whose `UnitType` matches `category`, in upstream order.
///
/// Both sides are compared lowercased; the output keeps the upstream casing.
/// An unrecognized `category` matches nothing.
pub fn filter_incidents(raw: &[RawIncident], category: &str) -> Vec<IncidentSummary> {
    let Some(category) = Category::parse(category) else {
        return Vec::new();
    };

    raw.iter()
        .filter(|incident| incident.unit_type.to_lowercase() == category.unit_type())
        .map(IncidentSummary::from)
        .collect()
}
