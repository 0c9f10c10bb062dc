//! Static-asset URL construction
//!
//! Static assets live under a directory tree derived from the asset
//! identifier: the first nine characters split into three 3-character shard
//! segments that become path components on the static host. Identifiers
//! shorter than nine characters have no storage path and are rejected
//! before any network access.

use std::fmt;

use spore_rest_client::AssetId;

use crate::error::{Error, Result};

/// Kinds of static data published for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StaticDataKind {
    /// XML model description
    Model,
    /// Full-size PNG rendering
    Image,
    /// Small PNG thumbnail
    Thumb,
}

impl StaticDataKind {
    /// Get all available kinds
    pub fn all() -> &'static [StaticDataKind] {
        &[
            StaticDataKind::Model,
            StaticDataKind::Image,
            StaticDataKind::Thumb,
        ]
    }

    /// Convert kind to its path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            StaticDataKind::Model => "model",
            StaticDataKind::Image => "image",
            StaticDataKind::Thumb => "thumb",
        }
    }

    /// Parse kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "model" => Some(StaticDataKind::Model),
            "image" => Some(StaticDataKind::Image),
            "thumb" => Some(StaticDataKind::Thumb),
            _ => None,
        }
    }
}

impl fmt::Display for StaticDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StaticDataKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        StaticDataKind::parse(s).ok_or_else(|| Error::InvalidDataType(s.to_string()))
    }
}

/// Result of a static-data lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticData {
    /// Raw XML model description, returned verbatim
    ModelXml(String),
    /// URL of a PNG the caller can fetch
    Url(String),
}

/// Build the URL for an asset's static data under the given host root.
///
/// `model` maps onto the sharded XML path, `image` onto the full-size PNG
/// (`_lrg` suffix) and `thumb` onto the plain thumbnail PNG.
pub fn static_data_url(base_url: &str, kind: StaticDataKind, asset: &AssetId) -> Result<String> {
    let [s1, s2, s3] = asset
        .shard_segments()
        .ok_or_else(|| Error::asset_id_too_short(asset.as_str()))?;

    let url = match kind {
        StaticDataKind::Model => {
            format!("{base_url}/static/model/{s1}/{s2}/{s3}/{asset}.xml")
        }
        StaticDataKind::Image => {
            format!("{base_url}/static/image/{s1}/{s2}/{s3}/{asset}_lrg.png")
        }
        StaticDataKind::Thumb => {
            format!("{base_url}/static/thumb/{s1}/{s2}/{s3}/{asset}.png")
        }
    };
    Ok(url)
}

/// Build the URL of the official achievement icon.
///
/// Icons are not sharded; this is pure URL construction and never performs
/// a network request.
pub fn achievement_icon_url(base_url: &str, achievement: &AssetId) -> String {
    format!("{base_url}/static/war/images/achievements/{achievement}.png")
}
