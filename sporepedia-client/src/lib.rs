//! # sporepedia-client
//!
//! HTTP client for the spore.com host and its three API namespaces:
//! `rest` (XML endpoints for users, creatures, assets and achievements),
//! `data` (static data endpoints) and `atom` (browse-view feeds), plus the
//! sharded static asset tree (`/static/...`).
//!
//! REST and feed responses are converted into plain nested-object trees
//! ([`serde_json::Value`]) with the XML declaration stripped. Model XML is
//! returned verbatim, and image/thumbnail/achievement-icon lookups are pure
//! URL construction with no network access.
//!
//! ```no_run
//! use sporepedia_client::{AssetId, SporepediaClient, ViewType};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SporepediaClient::new()?;
//!
//! // Twenty featured creations from the atom feed.
//! let featured = client.search(ViewType::Featured, 0, 20).await?;
//! println!("{featured:#}");
//!
//! // Thumbnail URL for an asset; no request is made.
//! let asset = AssetId::new("500327625531")?;
//! let thumb = client.asset_thumb_url(&asset)?;
//! println!("{thumb}");
//! # Ok(())
//! # }
//! ```
//!
//! Shared parameter types ([`AssetId`], [`Username`], [`Page`]) come from
//! `spore-rest-client` and are re-exported here. Constructing them can fail
//! with that crate's validation errors.

pub mod client;
pub mod error;
pub mod namespace;
pub mod static_data;
pub mod view;

pub use client::SporepediaClient;
pub use error::{Error, Result};
pub use namespace::Namespace;
pub use static_data::{StaticData, StaticDataKind, achievement_icon_url, static_data_url};
pub use view::{ViewType, feed_path};

pub use spore_rest_client::{AssetId, Page, Username};
