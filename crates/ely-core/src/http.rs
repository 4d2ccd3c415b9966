use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::errors::{ElyError, Result};

/// HTTP client settings shared by all API surfaces.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(30),
            user_agent: Some("ely-rs".to_string()),
        }
    }
}

/// Thin wrapper over [`reqwest::Client`] that maps non-2xx responses onto
/// [`ElyError::Upstream`] with the upstream error message attached.
#[derive(Debug, Clone)]
pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(settings: &HttpSettings) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.as_deref().unwrap_or("ely-rs"))
            .build()?;

        Ok(Self { client })
    }

    /// GET expecting a JSON body. A 204 with an empty body resolves to `None`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>> {
        let response = self.client.get(url).send().await?;
        let response = Self::check(response).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        Ok(Some(response.json().await?))
    }

    /// GET with an `Authorization: Bearer` header.
    pub async fn get_json_bearer<T: DeserializeOwned>(
        &self,
        url: Url,
        access_token: &str,
    ) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// POST a JSON body, expecting a JSON body back.
    pub async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// POST a JSON body where a successful response has an empty body.
    pub async fn post_json_unit<B: Serialize + ?Sized>(&self, url: Url, body: &B) -> Result<()> {
        let response = self.client.post(url).json(body).send().await?;
        Self::check(response).await?;

        Ok(())
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = upstream_message(&body);
        debug!(%status, %message, "upstream request failed");

        Err(ElyError::Upstream { status, message })
    }
}

/// Pull the human-readable message out of an upstream error body.
///
/// The authserver endpoints use `{"error": ..., "errorMessage": ...}`, the
/// account/OAuth endpoints use `{"message": ...}`.
fn upstream_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        error: Option<String>,
        #[serde(default, rename = "errorMessage")]
        error_message: Option<String>,
        #[serde(default)]
        message: Option<String>,
    }

    let snippet = || body.chars().take(200).collect::<String>();

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed
            .error_message
            .or(parsed.message)
            .or(parsed.error)
            .unwrap_or_else(snippet),
        Err(_) => snippet(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn upstream_message_prefers_error_message_field() {
        let body = r#"{"error":"ForbiddenOperationException","errorMessage":"Invalid credentials. Invalid username or password."}"#;
        assert_eq!(
            upstream_message(body),
            "Invalid credentials. Invalid username or password."
        );
    }

    #[test]
    fn upstream_message_falls_back_to_message_field() {
        let body = r#"{"message":"Invalid authorization code"}"#;
        assert_eq!(upstream_message(body), "Invalid authorization code");
    }

    #[test]
    fn upstream_message_falls_back_to_snippet_for_non_json() {
        assert_eq!(upstream_message("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }

    #[tokio::test]
    async fn get_json_resolves_204_to_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let http = Http::new(&HttpSettings::default()).unwrap();
        let url = Url::parse(&format!("{}/thing", server.uri())).unwrap();
        let result: Option<serde_json::Value> = http.get_json(url).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn non_2xx_becomes_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thing"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"errorMessage": "Invalid uuid format"})),
            )
            .mount(&server)
            .await;

        let http = Http::new(&HttpSettings::default()).unwrap();
        let url = Url::parse(&format!("{}/thing", server.uri())).unwrap();
        let result = http.get_json::<serde_json::Value>(url).await;

        match result {
            Err(ElyError::Upstream { status, message }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid uuid format");
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
