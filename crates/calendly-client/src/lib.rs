//! Client for the Calendly API v2.
//!
//! Wraps the user, event type and scheduled event endpoints plus the OAuth
//! refresh-token exchange. Every endpoint call issues a single request and
//! maps the HTTP status to an [`Error`] variant; there is no retry or paging
//! logic.

mod client;
mod error;
pub mod query;
mod session;
pub mod transport;

pub use calendly_core::EventStatus;
pub use client::{CalendlyClient, Credentials};
pub use error::{Error, Result};
pub use query::{EventTypesQuery, EventsQuery};
pub use session::Session;
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
