use ely_core::{ElyError, Http, Profile, Result};
use tracing::{debug, instrument};
use url::Url;

use crate::config::ProfilesConfig;
use crate::models::{ProfileWithProperties, UsernameHistoryEntry};

/// Client for the authserver's profile lookup endpoints.
///
/// Every lookup resolves to `Ok(None)` when the subject is unknown upstream
/// (HTTP 204) and to `Err` on any transport or upstream failure. Lookups
/// taking an optional parameter fall back to the configured default; when
/// both are absent the method short-circuits without touching the network.
#[derive(Debug, Clone)]
pub struct ProfileDirectory {
    config: ProfilesConfig,
    http: Http,
}

impl ProfileDirectory {
    pub fn new(config: ProfilesConfig) -> Result<Self> {
        let http = Http::new(&config.http)?;

        Ok(Self { config, http })
    }

    /// Look up the UUID behind a username.
    ///
    /// The username may be passed in any case; the server matches loosely
    /// (unlike the Mojang API, which requires a strict match).
    #[instrument(skip(self))]
    pub async fn uuid_by_username(&self, username: Option<&str>) -> Result<Option<Profile>> {
        let username = resolve_param(
            username,
            self.config.default_username.as_deref(),
            "username",
        )?;
        let url = self.endpoint(&format!("/api/users/profiles/minecraft/{username}"))?;

        debug!(username, "looking up profile by username");
        self.http.get_json(url).await
    }

    /// List every username an account has used, oldest first.
    #[instrument(skip(self))]
    pub async fn username_history_by_uuid(
        &self,
        uuid: Option<&str>,
    ) -> Result<Option<Vec<UsernameHistoryEntry>>> {
        let uuid = resolve_param(uuid, self.config.default_uuid.as_deref(), "uuid")?;
        let url = self.endpoint(&format!("/api/user/profiles/{uuid}/names"))?;

        debug!(uuid, "looking up username history");
        self.http.get_json(url).await
    }

    /// Resolve a batch of usernames to profiles in one request.
    ///
    /// The server accepts at most 100 names per call and silently skips
    /// unknown ones; the result order is not guaranteed to match the input.
    /// The cap is not checked client-side, so an oversized batch surfaces as
    /// the upstream `IllegalArgumentException`.
    #[instrument(skip(self, usernames), fields(count = usernames.len()))]
    pub async fn usernames_to_uuids(&self, usernames: &[&str]) -> Result<Vec<Profile>> {
        let url = self.endpoint("/api/profiles/minecraft")?;

        debug!(count = usernames.len(), "resolving usernames to UUIDs");
        self.http.post_json(url, usernames).await
    }

    /// Fetch the full profile, including texture properties, by UUID.
    #[instrument(skip(self))]
    pub async fn profile_by_uuid(
        &self,
        uuid: Option<&str>,
    ) -> Result<Option<ProfileWithProperties>> {
        let uuid = resolve_param(uuid, self.config.default_uuid.as_deref(), "uuid")?;
        let url = self.endpoint(&format!("/session/profile/{uuid}"))?;

        debug!(uuid, "fetching profile with properties");
        self.http.get_json(url).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.config.base_url, path))?)
    }
}

fn resolve_param<'a>(
    call_site: Option<&'a str>,
    default: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str> {
    call_site
        .filter(|value| !value.is_empty())
        .or_else(|| default.filter(|value| !value.is_empty()))
        .ok_or(ElyError::MissingParameter(name))
}
