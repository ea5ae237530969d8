use crate::error::{Error, Result};
use crate::query::{EventTypesQuery, EventsQuery};
use crate::session::{self, Session};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use calendly_core::{Config, DEFAULT_API_URL, DEFAULT_AUTH_URL};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

/// OAuth application and token credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl From<&Config> for Credentials {
    fn from(config: &Config) -> Self {
        Self::new(
            &config.client_id,
            &config.client_secret,
            &config.access_token,
            &config.refresh_token,
        )
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Request body for the refresh-token grant
#[derive(Debug, Serialize)]
struct RefreshTokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
}

/// Token endpoint response; both fields are looked up optionally
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Client for the Calendly API v2
///
/// Each call sends exactly one request and waits for it. The bearer token is
/// the only state shared between calls; replacing it requires `&mut self`, so
/// a client shared between tasks must be wrapped by the caller (for example in
/// a `tokio::sync::RwLock`) to refresh it.
pub struct CalendlyClient<T = ReqwestTransport> {
    transport: T,
    session: Session,
    credentials: Credentials,
    api_url: String,
    auth_url: String,
}

impl CalendlyClient<ReqwestTransport> {
    /// Create a client against the production endpoints
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_transport(credentials, ReqwestTransport::new()?)
    }

    /// Create a client from loaded configuration, honoring its base URLs
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Credentials::from(config))?.with_base_urls(&config.api_url, &config.auth_url))
    }
}

impl<T: Transport> CalendlyClient<T> {
    /// Create a client that sends its requests through `transport`
    pub fn with_transport(credentials: Credentials, transport: T) -> Result<Self> {
        let session = Session::new(&credentials.access_token)?;

        Ok(Self {
            transport,
            session,
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
        })
    }

    /// Point the client at other API and authorization hosts
    pub fn with_base_urls(mut self, api_url: impl AsRef<str>, auth_url: impl AsRef<str>) -> Self {
        self.api_url = api_url.as_ref().trim_end_matches('/').to_string();
        self.auth_url = auth_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /users/me`
    pub async fn get_current_user(&self) -> Result<Value> {
        self.get("/users/me", Vec::new()).await
    }

    /// `GET /users/{user_id}`
    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        self.get(&format!("/users/{}", user_id), Vec::new()).await
    }

    /// `GET /event_types` for one user
    pub async fn list_user_event_types(&self, query: &EventTypesQuery) -> Result<Value> {
        self.get("/event_types", query.to_pairs()).await
    }

    /// `GET /event_types/{event_type_id}`
    pub async fn get_event_type(&self, event_type_id: &str) -> Result<Value> {
        self.get(&format!("/event_types/{}", event_type_id), Vec::new())
            .await
    }

    /// `GET /scheduled_events`
    pub async fn list_events(&self, query: &EventsQuery) -> Result<Value> {
        self.get("/scheduled_events", query.to_pairs()).await
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// On success the session's bearer token is replaced and the newly issued
    /// refresh token is returned; the caller has to persist it for the next
    /// renewal. Any status other than 200 fails with [`Error::RefreshToken`]
    /// and leaves the session untouched.
    pub async fn renew_with_refresh_token(&mut self, refresh_token: &str) -> Result<Option<String>> {
        let payload = RefreshTokenRequest {
            grant_type: "refresh_token",
            client_id: &self.credentials.client_id,
            client_secret: &self.credentials.client_secret,
            refresh_token,
        };
        let url = format!("{}/oauth/token", self.auth_url);

        debug!(url = %url, "Renewing access token");

        let request = HttpRequest::new(Method::POST, url, session::auth_headers())
            .with_json(serde_json::to_value(&payload)?);

        let response = self.transport.send(request).await?;

        if response.status != StatusCode::OK {
            warn!(status = response.status.as_u16(), "Refresh token rejected");
            return Err(Error::RefreshToken);
        }

        let token: TokenResponse = serde_json::from_slice(&response.body)?;

        match token.access_token {
            Some(access_token) => {
                self.session.set_access_token(&access_token)?;
                self.credentials.access_token = access_token;
                info!("Access token renewed");
            }
            None => warn!("Token response has no access_token, keeping current one"),
        }

        Ok(token.refresh_token)
    }

    async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Value> {
        let url = format!("{}{}", self.api_url, path);

        debug!(path = path, params = query.len(), "Sending API request");

        let request =
            HttpRequest::new(Method::GET, url, self.session.headers().clone()).with_query(query);

        let response = self.transport.send(request).await?;
        process_response(response)
    }
}

/// Map the response status to an error, or parse the body on 200
fn process_response(response: HttpResponse) -> Result<Value> {
    if let Some(err) = Error::from_status(response.status) {
        debug!(
            status = response.status.as_u16(),
            body_len = response.body.len(),
            "API request failed"
        );
        return Err(err);
    }

    Ok(serde_json::from_slice(&response.body)?)
}
