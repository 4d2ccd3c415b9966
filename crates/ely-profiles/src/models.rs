use chrono::{DateTime, Utc};
use ely_core::Property;
use serde::{Deserialize, Serialize};

/// One entry of an account's username history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsernameHistoryEntry {
    pub name: String,

    /// When the account switched to this name, as reported by the server in
    /// epoch milliseconds. Absent for the account's original name.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub changed_to_at: Option<DateTime<Utc>>,
}

/// Full profile as served by the session server, including the signed
/// texture properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileWithProperties {
    /// UUID, served without hyphens.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}
