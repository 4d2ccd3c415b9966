use serde::{Deserialize, Serialize};

/// Minimal profile record: UUID plus the current username.
///
/// Returned by the directory lookups and embedded in Yggdrasil auth
/// responses as `selectedProfile`/`availableProfiles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    /// UUID, served without hyphens.
    pub id: String,
    pub name: String,
}

/// Arbitrary key/value metadata attached to profiles and user records,
/// e.g. skin and cape textures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}
