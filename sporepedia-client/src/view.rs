//! Browse views for the asset feed

use std::fmt;

/// Browse views recognized by the asset feed
///
/// Wire forms are the uppercase tags used in feed paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// Highest rated creations of all time
    TopRated,
    /// Highest rated recent creations
    TopRatedNew,
    /// Most recent creations
    Newest,
    /// Editorially featured creations
    Featured,
    /// A random sample of creations
    Random,
    /// The cute-and-creepy showcase
    CuteAndCreepy,
}

impl ViewType {
    /// Get all available views
    pub fn all() -> &'static [ViewType] {
        &[
            ViewType::TopRated,
            ViewType::TopRatedNew,
            ViewType::Newest,
            ViewType::Featured,
            ViewType::Random,
            ViewType::CuteAndCreepy,
        ]
    }

    /// Convert view to its wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::TopRated => "TOP_RATED",
            ViewType::TopRatedNew => "TOP_RATED_NEW",
            ViewType::Newest => "NEWEST",
            ViewType::Featured => "FEATURED",
            ViewType::Random => "RANDOM",
            ViewType::CuteAndCreepy => "CUTE_AND_CREEPY",
        }
    }

    /// Parse view from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TOP_RATED" => Some(ViewType::TopRated),
            "TOP_RATED_NEW" => Some(ViewType::TopRatedNew),
            "NEWEST" => Some(ViewType::Newest),
            "FEATURED" => Some(ViewType::Featured),
            "RANDOM" => Some(ViewType::Random),
            "CUTE_AND_CREEPY" => Some(ViewType::CuteAndCreepy),
            _ => None,
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ViewType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewType::parse(s).ok_or_else(|| crate::Error::InvalidViewType(s.to_string()))
    }
}

/// Path of the asset feed for a view, relative to the atom namespace
///
/// Both window parameters are required; the feed applies no defaults.
pub fn feed_path(view: ViewType, start_index: u32, length: u32) -> String {
    format!("/assets/view/{view}/{start_index}/{length}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_parse() {
        assert_eq!(ViewType::parse("TOP_RATED"), Some(ViewType::TopRated));
        assert_eq!(ViewType::parse("top_rated_new"), Some(ViewType::TopRatedNew));
        assert_eq!(
            ViewType::parse("CUTE_AND_CREEPY"),
            Some(ViewType::CuteAndCreepy)
        );
        assert_eq!(ViewType::parse("WORST_RATED"), None);
        assert_eq!(ViewType::parse(""), None);
    }

    #[test]
    fn test_view_from_str_classifies_unknown_tags() {
        use std::str::FromStr;

        assert_eq!(ViewType::from_str("NEWEST").unwrap(), ViewType::Newest);
        let err = ViewType::from_str("OLDEST").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidViewType(_)));
    }

    #[test]
    fn test_feed_path() {
        assert_eq!(
            feed_path(ViewType::Featured, 0, 20),
            "/assets/view/FEATURED/0/20"
        );
        assert_eq!(
            feed_path(ViewType::CuteAndCreepy, 40, 10),
            "/assets/view/CUTE_AND_CREEPY/40/10"
        );
    }
}
