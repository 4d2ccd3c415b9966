use ely_core::HttpSettings;

/// Browser-facing authorization page.
pub const AUTHORIZE_BASE: &str = "https://account.ely.by/oauth2/v1";

/// Token endpoint family.
pub const OAUTH_API_BASE: &str = "https://account.ely.by/api/oauth2/v1";

/// Account info endpoint family.
pub const ACCOUNT_API_BASE: &str = "https://account.ely.by/api/account/v1";

/// Configuration for [`OauthClient`](crate::OauthClient).
///
/// `client_id`, `client_secret` and `redirect_uri` come from the
/// application's registration at account.ely.by; all three are required.
#[derive(Debug, Clone)]
pub struct OauthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,

    /// Override the production endpoints to point at a mock server in tests.
    pub authorize_base: String,
    pub oauth_api_base: String,
    pub account_api_base: String,

    pub http: HttpSettings,
}

impl OauthConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            authorize_base: AUTHORIZE_BASE.to_string(),
            oauth_api_base: OAUTH_API_BASE.to_string(),
            account_api_base: ACCOUNT_API_BASE.to_string(),
            http: HttpSettings::default(),
        }
    }
}
