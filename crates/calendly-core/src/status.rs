use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status filter for scheduled events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Canceled,
}

impl EventStatus {
    /// Value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Active => "active",
            EventStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid event status: {0} (expected \"active\" or \"canceled\")")]
pub struct ParseEventStatusError(pub String);

impl FromStr for EventStatus {
    type Err = ParseEventStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(EventStatus::Active),
            "canceled" => Ok(EventStatus::Canceled),
            _ => Err(ParseEventStatusError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(EventStatus::Active.as_str(), "active");
        assert_eq!(EventStatus::Canceled.as_str(), "canceled");
        assert_eq!(EventStatus::Canceled.to_string(), "canceled");
    }

    #[test]
    fn test_parse() {
        assert_eq!("active".parse::<EventStatus>(), Ok(EventStatus::Active));
        assert_eq!("Canceled".parse::<EventStatus>(), Ok(EventStatus::Canceled));
        assert!("cancelled".parse::<EventStatus>().is_err());
        assert!("".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&EventStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");

        let status: EventStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert_eq!(status, EventStatus::Canceled);
    }
}
