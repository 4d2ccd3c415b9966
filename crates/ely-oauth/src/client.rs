use ely_core::{ElyError, Http, Result};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::OauthConfig;
use crate::models::{
    AccountInfo, AuthorizeParams, ExchangeCodeRequest, RefreshTokenRequest, Scope, TokenPair,
};

/// Client for the OAuth2 authorization-code flow of account.ely.by.
///
/// The flow itself lives in the browser redirect round-trip: build a URL
/// with [`authorize_url`](Self::authorize_url), send the user there, then
/// trade the `code` from the redirect callback via
/// [`exchange_code`](Self::exchange_code). No intermediate state is kept
/// here; tracking `state` and the requested scopes is the caller's job.
#[derive(Debug, Clone)]
pub struct OauthClient {
    config: OauthConfig,
    http: Http,
}

impl OauthClient {
    /// Fails with [`ElyError::Configuration`] when `client_id`,
    /// `client_secret` or `redirect_uri` is empty.
    pub fn new(config: OauthConfig) -> Result<Self> {
        if config.client_id.is_empty() {
            return Err(ElyError::missing_config("client_id"));
        }
        if config.client_secret.is_empty() {
            return Err(ElyError::missing_config("client_secret"));
        }
        if config.redirect_uri.is_empty() {
            return Err(ElyError::missing_config("redirect_uri"));
        }
        let http = Http::new(&config.http)?;

        Ok(Self { config, http })
    }

    /// Build the authorization URL to redirect the user to. Pure, no I/O.
    ///
    /// An empty scope list is allowed but almost certainly a mistake, so it
    /// is warned about and the `scope` parameter is omitted.
    #[instrument(skip(self))]
    pub fn authorize_url(&self, scopes: &[Scope], params: &AuthorizeParams) -> Result<Url> {
        if scopes.is_empty() {
            warn!("authorization URL requested without any scopes");
        }

        let mut url = Url::parse(&self.config.authorize_base)?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code");

        if !scopes.is_empty() {
            let joined = scopes
                .iter()
                .map(Scope::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            url.query_pairs_mut().append_pair("scope", &joined);
        }
        if let Some(state) = &params.state {
            url.query_pairs_mut().append_pair("state", state);
        }
        if let Some(description) = &params.description {
            url.query_pairs_mut().append_pair("description", description);
        }
        if let Some(prompt) = &params.prompt {
            url.query_pairs_mut().append_pair("prompt", prompt.as_str());
        }
        if let Some(login_hint) = &params.login_hint {
            url.query_pairs_mut().append_pair("login_hint", login_hint);
        }

        debug!(%url, "built authorization URL");
        Ok(url)
    }

    /// Exchange the authorization code from the redirect callback for tokens.
    ///
    /// The result carries a `refresh_token` only when `offline_access` was
    /// among the scopes requested in [`authorize_url`](Self::authorize_url);
    /// the library does not remember which scopes that was; the caller does.
    #[instrument(skip(self, code))]
    pub async fn exchange_code(&self, code: &str) -> Result<TokenPair> {
        let url = self.token_endpoint()?;
        let body = ExchangeCodeRequest {
            client_id: self.config.client_id.clone(),
            client_secret: self.config.client_secret.clone(),
            redirect_uri: self.config.redirect_uri.clone(),
            grant_type: "authorization_code",
            code: code.to_string(),
        };

        debug!("exchanging authorization code for tokens");
        self.http.post_json(url, &body).await
    }

    /// Fetch the account behind an access token carrying `account_info`.
    ///
    /// A missing scope is not detectable locally; it surfaces as an
    /// upstream error.
    #[instrument(skip(self, access_token))]
    pub async fn fetch_account(&self, access_token: &str) -> Result<AccountInfo> {
        let url = Url::parse(&format!("{}/info", self.config.account_api_base))?;

        debug!("fetching account info");
        self.http.get_json_bearer(url, access_token).await
    }

    /// Obtain a fresh access token from a long-lived refresh token.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair> {
        let url = self.token_endpoint()?;
        let body = RefreshTokenRequest {
            client_id: self.config.client_id.clone(),
            client_secret: self.config.client_secret.clone(),
            grant_type: "refresh_token",
            refresh_token: refresh_token.to_string(),
        };

        debug!("refreshing OAuth access token");
        self.http.post_json(url, &body).await
    }

    fn token_endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&format!("{}/token", self.config.oauth_api_base))?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::Prompt;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> OauthConfig {
        OauthConfig::new("ely-rs-demo", "t0p-s3cr3t", "https://example.com/callback")
    }

    fn client(server: &MockServer) -> OauthClient {
        OauthClient::new(OauthConfig {
            oauth_api_base: server.uri(),
            account_api_base: server.uri(),
            ..test_config()
        })
        .unwrap()
    }

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn missing_client_id_fails_construction() {
        let result = OauthClient::new(OauthConfig::new("", "secret", "https://example.com"));
        assert!(matches!(result, Err(ElyError::Configuration(_))));
    }

    #[test]
    fn missing_redirect_uri_fails_construction() {
        let result = OauthClient::new(OauthConfig::new("id", "secret", ""));
        assert!(matches!(result, Err(ElyError::Configuration(_))));
    }

    #[test]
    fn authorize_url_contains_required_params_and_omits_absent_ones() {
        let client = OauthClient::new(test_config()).unwrap();

        let url = client
            .authorize_url(
                &[Scope::AccountInfo, Scope::OfflineAccess],
                &AuthorizeParams {
                    state: Some("xyz".to_string()),
                    ..AuthorizeParams::default()
                },
            )
            .unwrap();
        let query = query_map(&url);

        assert_eq!(query["client_id"], "ely-rs-demo");
        assert_eq!(query["redirect_uri"], "https://example.com/callback");
        assert_eq!(query["response_type"], "code");
        assert_eq!(query["scope"], "account_info offline_access");
        assert_eq!(query["state"], "xyz");
        assert!(!query.contains_key("prompt"));
        assert!(!query.contains_key("login_hint"));
        assert!(!query.contains_key("description"));
    }

    #[test]
    fn authorize_url_carries_all_optional_params_when_set() {
        let client = OauthClient::new(test_config()).unwrap();

        let url = client
            .authorize_url(
                &[Scope::AccountEmail, Scope::MinecraftServerSession],
                &AuthorizeParams {
                    state: Some("abc".to_string()),
                    description: Some("Моё приложение".to_string()),
                    prompt: Some(Prompt::SelectAccount),
                    login_hint: Some("user@example.com".to_string()),
                },
            )
            .unwrap();
        let query = query_map(&url);

        assert_eq!(query["scope"], "account_email minecraft_server_session");
        assert_eq!(query["prompt"], "select_account");
        assert_eq!(query["login_hint"], "user@example.com");
        assert_eq!(query["description"], "Моё приложение");
    }

    #[test]
    fn authorize_url_without_scopes_omits_the_scope_param() {
        let client = OauthClient::new(test_config()).unwrap();

        let url = client.authorize_url(&[], &AuthorizeParams::default()).unwrap();
        assert!(!query_map(&url).contains_key("scope"));
    }

    #[tokio::test]
    async fn exchange_code_sends_the_exact_grant_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_json(json!({
                "client_id": "ely-rs-demo",
                "client_secret": "t0p-s3cr3t",
                "redirect_uri": "https://example.com/callback",
                "grant_type": "authorization_code",
                "code": "single-use-code",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-123",
                "refresh_token": "refresh-456",
                "token_type": "Bearer",
                "expires_in": 86400,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = client(&server).exchange_code("single-use-code").await.unwrap();

        assert_eq!(tokens.access_token, "access-123");
        assert_eq!(tokens.refresh_token.as_deref(), Some("refresh-456"));
        assert_eq!(tokens.token_type, "Bearer");
        assert_eq!(tokens.expires_in, 86400);
    }

    #[tokio::test]
    async fn exchange_code_tolerates_a_missing_refresh_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-123",
                "token_type": "Bearer",
                "expires_in": 86400,
            })))
            .mount(&server)
            .await;

        let tokens = client(&server).exchange_code("code").await.unwrap();
        assert!(tokens.refresh_token.is_none());
    }

    #[tokio::test]
    async fn exchange_code_surfaces_the_upstream_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "message": "Invalid authorization code",
            })))
            .mount(&server)
            .await;

        let result = client(&server).exchange_code("expired-code").await;
        match result {
            Err(ElyError::Upstream { message, .. }) => {
                assert_eq!(message, "Invalid authorization code");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refresh_token_grant_omits_the_redirect_uri() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_json(json!({
                "client_id": "ely-rs-demo",
                "client_secret": "t0p-s3cr3t",
                "grant_type": "refresh_token",
                "refresh_token": "refresh-456",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-789",
                "token_type": "Bearer",
                "expires_in": 86400,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tokens = client(&server).refresh_token("refresh-456").await.unwrap();

        assert_eq!(tokens.access_token, "access-789");
        assert!(tokens.refresh_token.is_none());
    }

    #[tokio::test]
    async fn fetch_account_sends_the_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/info"))
            .and(header("Authorization", "Bearer access-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "uuid": "ffc8fdc9-5824-509e-8a57-c99b940fb996",
                "username": "ErickSkrauch",
                "registeredAt": 1470566470,
                "profileLink": "http://ely.by/u1",
                "preferredLanguage": "be",
                "email": "erickskrauch@ely.by",
            })))
            .mount(&server)
            .await;

        let account = client(&server).fetch_account("access-123").await.unwrap();

        assert_eq!(account.id, 1);
        assert_eq!(account.username, "ErickSkrauch");
        assert_eq!(account.registered_at.timestamp(), 1470566470);
        assert_eq!(account.email.as_deref(), Some("erickskrauch@ely.by"));
    }

    #[tokio::test]
    async fn fetch_account_email_is_optional() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/info"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "uuid": "ffc8fdc9-5824-509e-8a57-c99b940fb996",
                "username": "ErickSkrauch",
                "registeredAt": 1470566470,
                "profileLink": "http://ely.by/u1",
                "preferredLanguage": "be",
            })))
            .mount(&server)
            .await;

        let account = client(&server).fetch_account("access-123").await.unwrap();
        assert!(account.email.is_none());
    }
}
