use ely_core::{Profile, Property};
use serde::{Deserialize, Serialize};

/// `/auth/authenticate` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateRequest {
    pub username: String,
    pub password: String,
    pub client_token: String,
    pub request_user: bool,
}

/// `/auth/refresh` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub access_token: String,
    pub client_token: String,
    pub request_user: bool,
}

/// `/auth/validate` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub access_token: String,
}

/// `/auth/signout` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignoutRequest {
    pub username: String,
    pub password: String,
}

/// `/auth/invalidate` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidateRequest {
    pub access_token: String,
    pub client_token: String,
}

/// Session returned by `/auth/authenticate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
    pub access_token: String,
    /// Echo of the client token sent with the request.
    pub client_token: String,
    pub selected_profile: Profile,
    pub available_profiles: Vec<Profile>,
    /// Present when the request asked for it via `requestUser`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
}

/// Session returned by `/auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    /// Echo of the client token sent with the request.
    pub client_token: String,
    pub selected_profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
}

/// Account record attached to auth responses when `requestUser` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub properties: Vec<Property>,
}
