use super::{BrowserFamily, Version, parse_user_agent};
use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// The browser family and version a `User-Agent` string resolves to.
///
/// Created once from a `User-Agent` string (see [`BrowserIdentity::parse`])
/// and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowserIdentity {
    family: BrowserFamily,
    #[serde(flatten)]
    version: Version,
}

impl BrowserIdentity {
    /// Create a new [`BrowserIdentity`] from its parts.
    #[must_use]
    pub const fn new(family: BrowserFamily, version: Version) -> Self {
        Self { family, version }
    }

    /// The identity used for `User-Agent` strings that match no signature.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::new(BrowserFamily::Unknown, Version::ZERO)
    }

    /// Parse a `User-Agent` string.
    ///
    /// This never fails: an empty or unrecognised string
    /// resolves to [`BrowserIdentity::unknown`].
    #[must_use]
    pub fn parse(ua: &str) -> Self {
        parse_user_agent(ua)
    }

    #[must_use]
    pub fn family(&self) -> BrowserFamily {
        self.family
    }

    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    #[must_use]
    pub fn major(&self) -> u32 {
        self.version.major
    }

    #[must_use]
    pub fn minor(&self) -> u32 {
        self.version.minor
    }

    #[must_use]
    pub fn patch(&self) -> u32 {
        self.version.patch
    }

    /// Returns `true` if no signature matched.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.family.is_unknown()
    }
}

impl Default for BrowserIdentity {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for BrowserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.version)
    }
}

impl FromStr for BrowserIdentity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_identity_unknown() {
        let identity = BrowserIdentity::unknown();
        assert!(identity.is_unknown());
        assert_eq!(identity.version(), Version::ZERO);
        assert_eq!(identity, BrowserIdentity::default());
        assert_eq!(identity.to_string(), "Unknown 0.0.0");
    }

    #[test]
    fn test_browser_identity_from_str() {
        let identity: BrowserIdentity = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:58.0) Gecko/20100101 Firefox/58.0.2"
            .parse()
            .unwrap();
        assert_eq!(identity.family(), BrowserFamily::Firefox);
        assert_eq!(
            (identity.major(), identity.minor(), identity.patch()),
            (58, 0, 2)
        );
        assert_eq!(identity.to_string(), "Firefox 58.0.2");
    }

    #[test]
    fn test_browser_identity_serde() {
        let identity = BrowserIdentity::new(BrowserFamily::MobileSafari, Version::new(11, 4, 0));
        let json = serde_json::to_value(identity).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "family": "Mobile Safari",
                "major": 11,
                "minor": 4,
                "patch": 0,
            })
        );
        let back: BrowserIdentity = serde_json::from_value(json).unwrap();
        assert_eq!(back, identity);
    }
}
