//! Mojang-compatible (Yggdrasil) authentication against the Ely.by
//! authserver: credential login, token refresh/validation and sign-out.
//!
//! # Example
//!
//! ```no_run
//! use ely_yggdrasil::{YggdrasilClient, YggdrasilConfig};
//!
//! #[tokio::main]
//! async fn main() -> ely_core::Result<()> {
//!     let client = YggdrasilClient::new(YggdrasilConfig::new("my-launcher-token"))?;
//!
//!     let session = client.authenticate("user@example.com", "password", true).await?;
//!     println!("playing as {}", session.selected_profile.name);
//!
//!     // Later: keep only the access token around and refresh it instead of
//!     // storing the password. A refresh failure means "log in again".
//!     let session = client.refresh(&session.access_token, false).await?;
//!     assert_eq!(session.client_token, client.client_token());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod models;

pub use client::YggdrasilClient;
pub use config::{AUTHSERVER_BASE, YggdrasilConfig};
pub use models::{AuthenticateResponse, RefreshResponse, UserRecord};

pub use ely_core::{ElyError, Profile, Property, Result};
