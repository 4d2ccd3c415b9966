use ely_core::HttpSettings;

/// Production base URL of the Ely.by authserver.
pub const AUTHSERVER_BASE: &str = "https://authserver.ely.by";

/// Configuration for [`ProfileDirectory`](crate::ProfileDirectory).
#[derive(Debug, Clone)]
pub struct ProfilesConfig {
    /// Base URL of the authserver. Point this at a mock server in tests.
    pub base_url: String,

    /// Fallback username applied when a lookup is called without one.
    pub default_username: Option<String>,

    /// Fallback UUID applied when a lookup is called without one.
    pub default_uuid: Option<String>,

    pub http: HttpSettings,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            base_url: AUTHSERVER_BASE.to_string(),
            default_username: None,
            default_uuid: None,
            http: HttpSettings::default(),
        }
    }
}

impl ProfilesConfig {
    /// Config with fallback identity for call sites that omit parameters.
    pub fn with_defaults(username: Option<String>, uuid: Option<String>) -> Self {
        Self {
            default_username: username,
            default_uuid: uuid,
            ..Self::default()
        }
    }
}
