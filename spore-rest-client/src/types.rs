//! Typed request parameters shared by the Spore.com clients

use std::fmt;

use crate::error::{Error, Result};

/// Default page size applied by the upstream service
pub const DEFAULT_PAGE_LENGTH: u32 = 100;

/// Characters that would alter the request path if embedded verbatim
const RESERVED: &[char] = &['/', '?', '#', '%'];

fn is_valid_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_graphic() && !RESERVED.contains(&c))
}

/// Identifier of a user-created asset (creature, sporecast, achievement, ...)
///
/// Asset identifiers are opaque tokens assigned by Spore.com. Construction
/// rejects empty strings and characters that would break the request path,
/// so a validated identifier can always be embedded verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    /// Validate and wrap an asset identifier
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if !is_valid_token(&id) {
            return Err(Error::invalid_asset_id(id));
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the identifier into the three directory shard segments used
    /// by the static asset host.
    ///
    /// Returns `None` when the identifier is shorter than nine characters;
    /// such identifiers have no storage path. Validation guarantees ASCII,
    /// so byte slicing is exact.
    pub fn shard_segments(&self) -> Option<[&str; 3]> {
        if self.0.len() < 9 {
            return None;
        }
        Some([&self.0[0..3], &self.0[3..6], &self.0[6..9]])
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for AssetId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A Spore.com account name
///
/// Same character rules as [`AssetId`]: printable ASCII with no
/// path-breaking characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and wrap a username
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if !is_valid_token(&username) {
            return Err(Error::invalid_username(username));
        }
        Ok(Self(username))
    }

    /// The username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Username {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Pagination window for list operations
///
/// `start_index` is the number of leading entries to skip and `length` the
/// page size. The upstream defaults are 0 and 100; `Page::default()` builds
/// exactly that window. No upper bound is enforced on `length`, the
/// service applies its own limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of entries to skip
    pub start_index: u32,
    /// Number of entries to fetch
    pub length: u32,
}

impl Page {
    /// Create an explicit pagination window
    pub fn new(start_index: u32, length: u32) -> Self {
        Self {
            start_index,
            length,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            start_index: 0,
            length: DEFAULT_PAGE_LENGTH,
        }
    }
}
