use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Reserved for authorization-code failures; no current call returns it
    #[error("Authorization failed")]
    Authorize,

    #[error("Refresh token exchange failed")]
    RefreshToken,

    #[error("Bad request")]
    BadRequest,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServer,

    #[error("Unknown API error")]
    Unknown,

    /// Raised by the transport itself (connection, DNS, TLS...), passed through as-is
    #[error("HTTP request failed: {0}")]
    Transport(#[from] Box<dyn std::error::Error + Send + Sync>),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl Error {
    /// Translate an API response status.
    ///
    /// Returns `None` for 200, the only status that yields a body.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::OK => None,
            StatusCode::BAD_REQUEST => Some(Error::BadRequest),
            StatusCode::UNAUTHORIZED => Some(Error::Unauthorized),
            StatusCode::FORBIDDEN => Some(Error::Forbidden),
            StatusCode::NOT_FOUND => Some(Error::NotFound),
            StatusCode::INTERNAL_SERVER_ERROR => Some(Error::InternalServer),
            _ => Some(Error::Unknown),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_is_not_an_error() {
        assert!(Error::from_status(StatusCode::OK).is_none());
    }

    #[test]
    fn test_mapped_statuses() {
        assert!(matches!(Error::from_status(StatusCode::BAD_REQUEST), Some(Error::BadRequest)));
        assert!(matches!(Error::from_status(StatusCode::UNAUTHORIZED), Some(Error::Unauthorized)));
        assert!(matches!(Error::from_status(StatusCode::FORBIDDEN), Some(Error::Forbidden)));
        assert!(matches!(Error::from_status(StatusCode::NOT_FOUND), Some(Error::NotFound)));
        assert!(matches!(
            Error::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            Some(Error::InternalServer)
        ));
    }

    #[test]
    fn test_other_statuses_are_unknown() {
        // Other 2xx codes are not success either
        for code in [201u16, 204, 302, 418, 429, 502, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(
                matches!(Error::from_status(status), Some(Error::Unknown)),
                "status {} should map to Unknown",
                code
            );
        }
    }
}
