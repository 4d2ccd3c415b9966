use ely_core::HttpSettings;

/// Production base URL of the Ely.by authserver.
pub const AUTHSERVER_BASE: &str = "https://authserver.ely.by";

/// Configuration for [`YggdrasilClient`](crate::YggdrasilClient).
#[derive(Debug, Clone)]
pub struct YggdrasilConfig {
    /// Base URL of the authserver. Point this at a mock server in tests.
    pub base_url: String,

    /// Opaque identifier of this client/launcher instance. The server echoes
    /// it unchanged in every authenticate/refresh response.
    pub client_token: String,

    pub http: HttpSettings,
}

impl YggdrasilConfig {
    pub fn new(client_token: impl Into<String>) -> Self {
        Self {
            base_url: AUTHSERVER_BASE.to_string(),
            client_token: client_token.into(),
            http: HttpSettings::default(),
        }
    }
}
