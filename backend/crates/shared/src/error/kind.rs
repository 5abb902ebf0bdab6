//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum. Kinds mirror HTTP status classes so that
//! failures reported by the remote housing API and failures raised locally
//! share one vocabulary.

use serde::Serialize;

/// What went wrong, in HTTP terms
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// // A rejected BVN on the application form
/// let kind = ErrorKind::UnprocessableEntity;
/// assert_eq!(kind.status_code(), 422);
/// assert_eq!(kind.to_string(), "Unprocessable Entity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400: malformed input (unknown state, bad filter)
    BadRequest,
    /// 401: login failed or the session is gone
    Unauthorized,
    /// 403
    Forbidden,
    /// 404: missing file or listing
    NotFound,
    /// 408: the housing API did not answer in time
    RequestTimeout,
    /// 409
    Conflict,
    /// 422: form or profile data rejected
    UnprocessableEntity,
    /// 429
    TooManyRequests,
    /// 500: local failure (session store, serialization)
    InternalServerError,
    /// 502: the housing API answered with something unusable
    BadGateway,
    /// 503: the housing API could not be reached
    ServiceUnavailable,
}

impl ErrorKind {
    /// Matching HTTP status code
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Short label shown to the applicant
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx kinds: nothing the applicant typed will fix these
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
