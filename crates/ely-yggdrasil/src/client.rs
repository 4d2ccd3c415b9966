use ely_core::{ElyError, Http, Result, StatusCode};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::YggdrasilConfig;
use crate::models::{
    AuthenticateRequest, AuthenticateResponse, InvalidateRequest, RefreshRequest, RefreshResponse,
    SignoutRequest, ValidateRequest,
};

/// Client for the authserver's Mojang-compatible (Yggdrasil) endpoints.
///
/// The configured `client_token` identifies this launcher instance and is
/// sent with every authenticate/refresh call; the server echoes it back
/// unchanged.
#[derive(Debug, Clone)]
pub struct YggdrasilClient {
    config: YggdrasilConfig,
    http: Http,
}

impl YggdrasilClient {
    /// Fails with [`ElyError::Configuration`] when `client_token` is empty.
    pub fn new(config: YggdrasilConfig) -> Result<Self> {
        if config.client_token.is_empty() {
            return Err(ElyError::missing_config("client_token"));
        }
        let http = Http::new(&config.http)?;

        Ok(Self { config, http })
    }

    pub fn client_token(&self) -> &str {
        &self.config.client_token
    }

    /// Authenticate with a username (or e-mail, preferred) and password.
    ///
    /// Accounts protected by two-factor auth pass the TOTP token inside the
    /// password field as `password:token`, since the Yggdrasil protocol has no
    /// dedicated field for it. With `request_user` set, the response carries
    /// the account record alongside the profiles.
    #[instrument(skip(self, username, password))]
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
        request_user: bool,
    ) -> Result<AuthenticateResponse> {
        let url = self.endpoint("/auth/authenticate")?;
        let body = AuthenticateRequest {
            username: username.to_string(),
            password: password.to_string(),
            client_token: self.config.client_token.clone(),
            request_user,
        };

        debug!("authenticating with credentials");
        let response: AuthenticateResponse = self.http.post_json(url, &body).await?;
        self.check_client_token_echo(&response.client_token);

        Ok(response)
    }

    /// Trade a stored access token for a fresh one.
    ///
    /// Lets callers keep only the `accessToken` around instead of the
    /// password. An error here means the token is expired or revoked and the
    /// user has to re-authenticate with credentials.
    #[instrument(skip(self, access_token))]
    pub async fn refresh(&self, access_token: &str, request_user: bool) -> Result<RefreshResponse> {
        let url = self.endpoint("/auth/refresh")?;
        let body = RefreshRequest {
            access_token: access_token.to_string(),
            client_token: self.config.client_token.clone(),
            request_user,
        };

        debug!("refreshing access token");
        let response: RefreshResponse = self.http.post_json(url, &body).await?;
        self.check_client_token_echo(&response.client_token);

        Ok(response)
    }

    /// Check whether an access token is still valid without extending it.
    ///
    /// Returns `Ok(false)` on 401: an invalid/expired token is an expected
    /// outcome, not an error. Any other failure is `Err`, so callers can
    /// tell "definitely invalid" apart from "could not determine".
    #[instrument(skip(self, access_token))]
    pub async fn validate(&self, access_token: &str) -> Result<bool> {
        let url = self.endpoint("/auth/validate")?;
        let body = ValidateRequest {
            access_token: access_token.to_string(),
        };

        match self.http.post_json_unit(url, &body).await {
            Ok(()) => Ok(true),
            Err(ElyError::Upstream { status, .. }) if status == StatusCode::UNAUTHORIZED => {
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }

    /// Invalidate every token issued to the account. Success is an empty body.
    #[instrument(skip(self, username, password))]
    pub async fn signout(&self, username: &str, password: &str) -> Result<()> {
        let url = self.endpoint("/auth/signout")?;
        let body = SignoutRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        debug!("signing out all sessions");
        self.http.post_json_unit(url, &body).await
    }

    /// Invalidate a single access token.
    ///
    /// The server reports success even when the token is not in its store,
    /// so this resolves `Ok` for already-invalidated tokens.
    #[instrument(skip(self, access_token, client_token))]
    pub async fn invalidate(&self, access_token: &str, client_token: &str) -> Result<()> {
        let url = self.endpoint("/auth/invalidate")?;
        let body = InvalidateRequest {
            access_token: access_token.to_string(),
            client_token: client_token.to_string(),
        };

        debug!("invalidating access token");
        self.http.post_json_unit(url, &body).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.config.base_url, path))?)
    }

    fn check_client_token_echo(&self, echoed: &str) {
        if echoed != self.config.client_token {
            warn!(
                sent = %self.config.client_token,
                received = %echoed,
                "server echoed a different clientToken"
            );
        }
    }
}
