//! API namespace support for spore.com

use std::fmt;

/// Path namespaces exposed on the spore.com host
///
/// All three share the host; each carries its own endpoint set. Requests
/// are prefixed with the lowercase namespace tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// REST-style XML endpoints
    Rest,
    /// Static data endpoints
    Data,
    /// Atom feed endpoints
    Atom,
}

impl Namespace {
    /// Get all available namespaces
    pub fn all() -> &'static [Namespace] {
        &[Namespace::Rest, Namespace::Data, Namespace::Atom]
    }

    /// Convert namespace to its path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Rest => "rest",
            Namespace::Data => "data",
            Namespace::Atom => "atom",
        }
    }

    /// Parse namespace from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rest" => Some(Namespace::Rest),
            "data" => Some(Namespace::Data),
            "atom" => Some(Namespace::Atom),
            _ => None,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Namespace {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::parse(s).ok_or_else(|| crate::Error::InvalidNamespace(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_parse() {
        assert_eq!(Namespace::parse("rest"), Some(Namespace::Rest));
        assert_eq!(Namespace::parse("DATA"), Some(Namespace::Data));
        assert_eq!(Namespace::parse("atom"), Some(Namespace::Atom));
        assert_eq!(Namespace::parse("feed"), None);
    }

    #[test]
    fn test_namespace_from_str() {
        use std::str::FromStr;

        assert_eq!(Namespace::from_str("atom").unwrap(), Namespace::Atom);
        assert!(Namespace::from_str("static").is_err());
    }

    #[test]
    fn test_namespace_display() {
        assert_eq!(Namespace::Rest.to_string(), "rest");
        assert_eq!(Namespace::Data.to_string(), "data");
        assert_eq!(Namespace::Atom.to_string(), "atom");
    }
}
