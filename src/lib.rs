//! # wmata-incidents
//!
//! A small HTTP proxy over the WMATA elevator/escalator incidents feed.
//!
//! `GET /incidents/elevators` or `GET /incidents/escalators` makes one call
//! to the upstream `ElevatorIncidents` endpoint, keeps the records of the
//! requested unit type and answers with a pretty-printed JSON array of
//! `{StationCode, StationName, UnitName, UnitType}` objects.
//!
//! ## Behavior worth knowing
//!
//! - The incidents route always answers `200 OK`. When the upstream fails,
//!   the body is `[{"error": "Failed to retrieve incidents (HTTP <code>)"}]`.
//! - An unknown unit type (`/incidents/ramps`) is `[]`, not an error.
//! - The category and the upstream `UnitType` are compared
//!   case-insensitively; output keeps the upstream casing and order.
//!
//! ## Running
//!
//! ```text
//! WMATA_API_KEY=... RUST_LOG=info cargo run
//! curl http://127.0.0.1:5000/incidents/escalators
//! ```
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wmata_incidents::{Config, IncidentFetcher, IncidentService, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wmata_incidents::Error> {
//!     let config = Config::from_env()?;
//!     let service = Arc::new(IncidentService::new(IncidentFetcher::new(&config)?));
//!     Server::bind(config.bind_addr).await?.serve(app(service)).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod health;
pub mod incidents;
pub mod logging;

pub use config::Config;
pub use error::{Error, FetchError};
pub use handler::Handler;
pub use incidents::{IncidentFetcher, IncidentService, app};
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
