//! Username and UUID lookups against the Ely.by authserver.
//!
//! # Example
//!
//! ```no_run
//! use ely_profiles::{ProfileDirectory, ProfilesConfig};
//!
//! #[tokio::main]
//! async fn main() -> ely_core::Result<()> {
//!     let directory = ProfileDirectory::new(ProfilesConfig::default())?;
//!
//!     match directory.uuid_by_username(Some("ErickSkrauch")).await? {
//!         Some(profile) => println!("{} -> {}", profile.name, profile.id),
//!         None => println!("no such user"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod models;

pub use client::ProfileDirectory;
pub use config::{AUTHSERVER_BASE, ProfilesConfig};
pub use models::{ProfileWithProperties, UsernameHistoryEntry};

pub use ely_core::{ElyError, Profile, Property, Result};
