//! HTTP status codes as a typed enum.
//!
//! Use [`Status`] anywhere a status code is accepted: `Response::status()`
//! or `Response::builder().status()`.
//!
//! Only the codes this proxy actually emits are listed. The incidents route
//! itself always answers `200`, even when the upstream feed fails.

/// HTTP status codes produced by the proxy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,                  // 200
    NotFound,            // 404
    MethodNotAllowed,    // 405
    InternalServerError, // 500
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok                  => 200,
            Self::NotFound            => 404,
            Self::MethodNotAllowed    => 405,
            Self::InternalServerError => 500,
        }
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 { s.code() }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> Self {
        match s {
            Status::Ok                  => Self::OK,
            Status::NotFound            => Self::NOT_FOUND,
            Status::MethodNotAllowed    => Self::METHOD_NOT_ALLOWED,
            Status::InternalServerError => Self::INTERNAL_SERVER_ERROR,
        }
    }
}
