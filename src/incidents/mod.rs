//! Elevator and escalator incidents: fetch from the upstream feed, filter by
//! unit category, re-serve as JSON.

mod api;
mod fetch;
mod filter;
mod model;

pub use api::{IncidentService, app};
pub use fetch::IncidentFetcher;
pub use filter::filter_incidents;
pub use model::{Category, IncidentFeed, IncidentSummary, RawIncident};
