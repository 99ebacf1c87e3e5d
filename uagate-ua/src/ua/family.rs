use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use uagate_error::OpaqueError;
use uagate_utils::macros::match_ignore_ascii_case_str;

/// The browser family of a [`BrowserIdentity`].
///
/// Mobile and embedded variants are families of their own,
/// as requirement tables gate them independently from their desktop counterpart.
///
/// [`BrowserIdentity`]: super::BrowserIdentity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BrowserFamily {
    /// Google Chrome (and other Chromium based browsers not listed separately)
    Chrome,
    /// Android System WebView, Chrome embedded within an app
    ChromeWebView,
    /// Chromium Browser
    Chromium,
    /// Microsoft Edge, both the EdgeHTML and the Chromium based releases
    Edge,
    /// Mozilla Firefox, including Firefox for iOS
    Firefox,
    /// Desktop Safari
    Safari,
    /// Safari on iPhone, iPad and iPod
    MobileSafari,
    /// Opera, both the Presto and the Chromium based releases
    Opera,
    /// Microsoft Internet Explorer
    InternetExplorer,
    /// The stock Android Browser, versioned by the Android release it ships with
    Android,
    /// Samsung Internet
    SamsungInternet,
    /// Sentinel for User Agents that match no known signature.
    Unknown,
}

impl BrowserFamily {
    /// All families, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Chrome,
        Self::ChromeWebView,
        Self::Chromium,
        Self::Edge,
        Self::Firefox,
        Self::Safari,
        Self::MobileSafari,
        Self::Opera,
        Self::InternetExplorer,
        Self::Android,
        Self::SamsungInternet,
        Self::Unknown,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::ChromeWebView => "Chrome WebView",
            Self::Chromium => "Chromium",
            Self::Edge => "Edge",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::MobileSafari => "Mobile Safari",
            Self::Opera => "Opera",
            Self::InternetExplorer => "IE",
            Self::Android => "Android",
            Self::SamsungInternet => "Samsung Internet",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns `true` for the [`Unknown`](Self::Unknown) sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BrowserFamily {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "chrome" => Ok(Self::Chrome),
                "chrome webview" => Ok(Self::ChromeWebView),
                "chromium" => Ok(Self::Chromium),
                "edge" => Ok(Self::Edge),
                "firefox" => Ok(Self::Firefox),
                "safari" => Ok(Self::Safari),
                "mobile safari" => Ok(Self::MobileSafari),
                "opera" => Ok(Self::Opera),
                "ie" | "internet explorer" => Ok(Self::InternetExplorer),
                "android" => Ok(Self::Android),
                "samsung internet" => Ok(Self::SamsungInternet),
                "unknown" => Ok(Self::Unknown),
                _ => Err(OpaqueError::from_display(format!("invalid browser family: {s}"))),
            }
        }
    }
}

impl Serialize for BrowserFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BrowserFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
