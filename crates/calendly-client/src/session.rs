use crate::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

pub(crate) const CONTENT_TYPE_JSON: &str = "application/json";

/// Headers sent with every API call.
///
/// Holds the bearer token; the only mutation is replacing it after a refresh.
#[derive(Debug, Clone)]
pub struct Session {
    headers: HeaderMap,
}

impl Session {
    pub fn new(access_token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(AUTHORIZATION, bearer(access_token)?);

        Ok(Self { headers })
    }

    /// Replace the bearer token. On error the current header is kept.
    pub fn set_access_token(&mut self, access_token: &str) -> Result<()> {
        let value = bearer(access_token)?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Current `Authorization` header value
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Headers for the authorization server, which takes no bearer token
pub(crate) fn auth_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    headers
}

fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_headers() {
        let session = Session::new("A1").unwrap();

        assert_eq!(session.authorization(), Some("Bearer A1"));
        assert_eq!(
            session.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(session.headers().len(), 2);
    }

    #[test]
    fn test_set_access_token_replaces_bearer() {
        let mut session = Session::new("A1").unwrap();
        session.set_access_token("A2").unwrap();

        assert_eq!(session.authorization(), Some("Bearer A2"));
        assert_eq!(session.headers().get_all(AUTHORIZATION).iter().count(), 1);
    }

    #[test]
    fn test_invalid_token_keeps_previous_header() {
        let mut session = Session::new("A1").unwrap();

        assert!(session.set_access_token("bad\ntoken").is_err());
        assert_eq!(session.authorization(), Some("Bearer A1"));
    }

    #[test]
    fn test_token_hidden_from_debug() {
        let session = Session::new("super-secret").unwrap();
        assert!(!format!("{:?}", session).contains("super-secret"));
    }

    #[test]
    fn test_auth_headers_have_no_bearer() {
        let headers = auth_headers();
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}
