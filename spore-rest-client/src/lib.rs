//! # spore-rest-client
//!
//! HTTP client for the Spore.com REST API: daily stats, creature stats,
//! user profiles, assets, achievements, buddies, sporecasts and comments.
//!
//! Each operation maps typed parameters onto a fixed path template under
//! `http://spore.com/rest`, performs one GET, and converts the XML body
//! into a plain nested-object tree ([`serde_json::Value`]) with the XML
//! declaration stripped. Failures classify into a single error shape
//! carrying the observed status and the attempted URL.
//!
//! ```no_run
//! use spore_rest_client::{Page, RestClient, Username};
//!
//! # async fn run() -> spore_rest_client::Result<()> {
//! let client = RestClient::new()?;
//!
//! let username = Username::new("MaxisWill")?;
//! let profile = client.user(&username).await?;
//! println!("{profile:#}");
//!
//! // First page of 20 creations.
//! let assets = client.user_assets(&username, Page::new(0, 20)).await?;
//! println!("{assets:#}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod paths;
pub mod types;

pub use client::RestClient;
pub use error::{Error, Result};
pub use types::{AssetId, DEFAULT_PAGE_LENGTH, Page, Username};
