//! Unified error types.

use thiserror::Error;

/// The error type returned by the proxy's fallible startup operations.
///
/// Request-level outcomes (404, 405, upstream failures) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: bad configuration, binding to a port, accepting a
/// connection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {var}: {reason}")]
    Config { var: &'static str, reason: String },
}

impl Error {
    pub(crate) fn config(var: &'static str, reason: impl Into<String>) -> Self {
        Self::Config { var, reason: reason.into() }
    }
}

/// Why the upstream incidents feed could not be read.
///
/// Only [`FetchError::Status`] is an answer from the upstream; every other
/// variant means no usable answer arrived at all.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid upstream request: {0}")]
    Request(#[from] http::Error),

    #[error("upstream unreachable: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("upstream body: {0}")]
    Body(#[from] hyper::Error),

    #[error("upstream json: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_an_http_code() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP 503");
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = Error::config("BIND_ADDR", "invalid socket address");
        assert_eq!(err.to_string(), "config: BIND_ADDR: invalid socket address");
    }
}
