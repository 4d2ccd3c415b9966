use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Permissions that can be requested during authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    AccountInfo,
    AccountEmail,
    /// Grants a `refresh_token` alongside the access token.
    OfflineAccess,
    MinecraftServerSession,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountInfo => "account_info",
            Self::AccountEmail => "account_email",
            Self::OfflineAccess => "offline_access",
            Self::MinecraftServerSession => "minecraft_server_session",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior override for the authorization page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    /// Force the permission request to be shown again.
    Consent,
    /// Force the account chooser even when only one account is logged in.
    SelectAccount,
}

impl Prompt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Consent => "consent",
            Self::SelectAccount => "select_account",
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional query parameters for
/// [`OauthClient::authorize_url`](crate::OauthClient::authorize_url).
/// Absent fields are left out of the URL entirely.
#[derive(Debug, Clone, Default)]
pub struct AuthorizeParams {
    /// Random session identifier, returned unchanged in the redirect.
    pub state: Option<String>,
    /// Overrides the application description shown on the consent page.
    pub description: Option<String>,
    pub prompt: Option<Prompt>,
    /// Username or e-mail to preselect when the user has several accounts.
    pub login_hint: Option<String>,
}

/// `/token` request body for the authorization_code grant.
#[derive(Debug, Clone, Serialize)]
pub struct ExchangeCodeRequest {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub grant_type: &'static str,
    pub code: String,
}

/// `/token` request body for the refresh_token grant.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub grant_type: &'static str,
    pub refresh_token: String,
}

/// `/token` response for both grant types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    /// Present only when the original authorization requested the
    /// `offline_access` scope. The refresh_token grant never returns a new
    /// one; the original stays valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

/// `/info` response. Requires a token carrying the `account_info` scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub id: u64,
    pub uuid: String,
    pub username: String,
    /// Wire format is epoch seconds.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub registered_at: DateTime<Utc>,
    pub profile_link: String,
    pub preferred_language: String,
    /// Requires the `account_email` scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
