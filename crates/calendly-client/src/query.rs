//! Query parameters for the listing endpoints.
//!
//! Optional values that are `None` or empty are left out of the query
//! entirely; they are never sent as empty parameters.

use calendly_core::EventStatus;

/// Default page size for listing endpoints
pub const DEFAULT_COUNT: u32 = 20;

pub const DEFAULT_EVENT_TYPES_SORT: &str = "name:asc";

pub const DEFAULT_EVENTS_SORT: &str = "start_time:asc";

/// Parameters for `GET /event_types`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTypesQuery {
    /// URI of the user owning the event types (wire name `user`)
    pub user_uri: String,
    pub sort: String,
    pub count: u32,
    /// Cursor from a previous page
    pub page_token: Option<String>,
}

impl EventTypesQuery {
    pub fn new(user_uri: impl Into<String>) -> Self {
        Self {
            user_uri: user_uri.into(),
            sort: DEFAULT_EVENT_TYPES_SORT.to_string(),
            count: DEFAULT_COUNT,
            page_token: None,
        }
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("user".to_string(), self.user_uri.clone()),
            ("sort".to_string(), self.sort.clone()),
            ("count".to_string(), self.count.to_string()),
        ];
        push_optional(&mut pairs, "page_token", self.page_token.as_deref());
        pairs
    }
}

/// Parameters for `GET /scheduled_events`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    pub count: u32,
    pub sort: String,
    pub invitee_email: Option<String>,
    pub max_start_time: Option<String>,
    pub min_start_time: Option<String>,
    /// Sent as `organization`
    pub organization_uri: Option<String>,
    pub page_token: Option<String>,
    pub status: Option<EventStatus>,
    /// Sent as `user`
    pub user_uri: Option<String>,
}

impl Default for EventsQuery {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            sort: DEFAULT_EVENTS_SORT.to_string(),
            invitee_email: None,
            max_start_time: None,
            min_start_time: None,
            organization_uri: None,
            page_token: None,
            status: None,
            user_uri: None,
        }
    }
}

impl EventsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn invitee_email(mut self, email: impl Into<String>) -> Self {
        self.invitee_email = Some(email.into());
        self
    }

    pub fn max_start_time(mut self, time: impl Into<String>) -> Self {
        self.max_start_time = Some(time.into());
        self
    }

    pub fn min_start_time(mut self, time: impl Into<String>) -> Self {
        self.min_start_time = Some(time.into());
        self
    }

    pub fn organization_uri(mut self, uri: impl Into<String>) -> Self {
        self.organization_uri = Some(uri.into());
        self
    }

    pub fn page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn user_uri(mut self, uri: impl Into<String>) -> Self {
        self.user_uri = Some(uri.into());
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("count".to_string(), self.count.to_string()),
            ("sort".to_string(), self.sort.clone()),
        ];
        push_optional(&mut pairs, "invitee_email", self.invitee_email.as_deref());
        push_optional(&mut pairs, "max_start_time", self.max_start_time.as_deref());
        push_optional(&mut pairs, "min_start_time", self.min_start_time.as_deref());
        push_optional(&mut pairs, "organization", self.organization_uri.as_deref());
        push_optional(&mut pairs, "page_token", self.page_token.as_deref());
        push_optional(&mut pairs, "status", self.status.map(|s| s.as_str()));
        push_optional(&mut pairs, "user", self.user_uri.as_deref());
        pairs
    }
}

fn push_optional(pairs: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        pairs.push((key.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &[(String, String)]) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_event_types_defaults() {
        let pairs = EventTypesQuery::new("U").to_pairs();

        assert_eq!(
            pairs,
            vec![
                ("user".to_string(), "U".to_string()),
                ("sort".to_string(), "name:asc".to_string()),
                ("count".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_event_types_page_token() {
        let pairs = EventTypesQuery::new("U").page_token("tok123").to_pairs();
        assert_eq!(pairs.last().unwrap(), &("page_token".to_string(), "tok123".to_string()));

        // Empty cursor is treated as absent
        let pairs = EventTypesQuery::new("U").page_token("").to_pairs();
        assert!(!keys(&pairs).contains(&"page_token"));
    }

    #[test]
    fn test_events_defaults_only_count_and_sort() {
        let pairs = EventsQuery::default().to_pairs();

        assert_eq!(keys(&pairs), vec!["count", "sort"]);
        assert_eq!(pairs[1].1, "start_time:asc");
    }

    #[test]
    fn test_events_status_only() {
        let pairs = EventsQuery::new().status(EventStatus::Canceled).to_pairs();

        assert_eq!(keys(&pairs), vec!["count", "sort", "status"]);
        assert_eq!(pairs[2].1, "canceled");
    }

    #[test]
    fn test_events_wire_names() {
        let pairs = EventsQuery::new()
            .count(50)
            .sort("start_time:desc")
            .invitee_email("a@example.com")
            .max_start_time("2024-02-01T00:00:00Z")
            .min_start_time("2024-01-01T00:00:00Z")
            .organization_uri("https://api.calendly.com/organizations/O")
            .page_token("next")
            .status(EventStatus::Active)
            .user_uri("https://api.calendly.com/users/U")
            .to_pairs();

        assert_eq!(
            keys(&pairs),
            vec![
                "count",
                "sort",
                "invitee_email",
                "max_start_time",
                "min_start_time",
                "organization",
                "page_token",
                "status",
                "user",
            ]
        );
        assert_eq!(pairs[0].1, "50");
        assert_eq!(pairs[5].1, "https://api.calendly.com/organizations/O");
    }

    #[test]
    fn test_events_empty_strings_omitted() {
        let query = EventsQuery {
            invitee_email: Some(String::new()),
            user_uri: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(keys(&query.to_pairs()), vec!["count", "sort"]);
    }
}
