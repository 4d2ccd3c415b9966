//! OAuth2 authorization-code flow for Ely.by accounts.
//!
//! Two decoupled steps: build an authorization URL and redirect the user
//! there, then exchange the `code` from the redirect callback for a token
//! pair. The state machine lives entirely in that browser round-trip: the
//! client keeps no per-flow state, and tracking `state`/requested scopes
//! across the redirect is the caller's responsibility.
//!
//! # Example
//!
//! ```no_run
//! use ely_oauth::{AuthorizeParams, OauthClient, OauthConfig, Scope};
//!
//! #[tokio::main]
//! async fn main() -> ely_core::Result<()> {
//!     let client = OauthClient::new(OauthConfig::new(
//!         "my-client-id",
//!         "my-client-secret",
//!         "https://example.com/callback",
//!     ))?;
//!
//!     let url = client.authorize_url(
//!         &[Scope::AccountInfo, Scope::OfflineAccess],
//!         &AuthorizeParams {
//!             state: Some("random-state".to_string()),
//!             ..AuthorizeParams::default()
//!         },
//!     )?;
//!     println!("open in a browser: {url}");
//!
//!     // ...the redirect callback delivers ?code=...&state=...
//!     let tokens = client.exchange_code("code-from-redirect").await?;
//!     let account = client.fetch_account(&tokens.access_token).await?;
//!     println!("authorized as {}", account.username);
//!
//!     // offline_access was requested, so a refresh token is present.
//!     if let Some(refresh_token) = &tokens.refresh_token {
//!         let fresh = client.refresh_token(refresh_token).await?;
//!         assert!(fresh.refresh_token.is_none());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod models;

pub use client::OauthClient;
pub use config::{ACCOUNT_API_BASE, AUTHORIZE_BASE, OAUTH_API_BASE, OauthConfig};
pub use models::{AccountInfo, AuthorizeParams, Prompt, Scope, TokenPair};

pub use ely_core::{ElyError, Result};
