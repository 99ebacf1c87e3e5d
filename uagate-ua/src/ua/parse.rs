use super::{BrowserFamily, BrowserIdentity, Version};
use uagate_utils::str::{all_submatch_ignore_ascii_case, contains_ignore_ascii_case};

/// Maximum length of a User Agent string that we take into consideration.
/// This is significantly longer then expected in the wild where at most we observed around 300 characters.
const MAX_UA_LENGTH: usize = 512;

/// A single entry of the ordered signature list used to resolve a [`BrowserIdentity`].
///
/// A signature matches a `User-Agent` string when all of its markers occur
/// in it and one of its version tokens is directly followed by a version number.
/// All comparisons are ASCII case insensitive.
#[derive(Debug)]
pub struct Signature {
    family: BrowserFamily,
    markers: &'static [&'static str],
    version_tokens: &'static [&'static str],
}

impl Signature {
    const fn new(
        family: BrowserFamily,
        markers: &'static [&'static str],
        version_tokens: &'static [&'static str],
    ) -> Self {
        Self {
            family,
            markers,
            version_tokens,
        }
    }

    /// The family this signature resolves to.
    #[must_use]
    pub fn family(&self) -> BrowserFamily {
        self.family
    }

    /// Substrings that all have to be present.
    #[must_use]
    pub fn markers(&self) -> &'static [&'static str] {
        self.markers
    }

    /// Tokens after which the version is read, tried in order.
    #[must_use]
    pub fn version_tokens(&self) -> &'static [&'static str] {
        self.version_tokens
    }

    /// Returns the version extracted by this signature,
    /// or `None` if this signature does not match the given `User-Agent`.
    #[must_use]
    pub fn matches(&self, ua: &str) -> Option<Version> {
        self.match_bytes(truncate(ua))
    }

    fn match_bytes(&self, ua: &[u8]) -> Option<Version> {
        if !all_submatch_ignore_ascii_case(ua, self.markers) {
            return None;
        }
        self.version_tokens.iter().find_map(|token| {
            let loc = contains_ignore_ascii_case(ua, token)?;
            parse_version(ua.get(loc + token.len()..)?)
        })
    }
}

/// Signatures in priority order: the first match wins.
///
/// Tokens that textually contain a more generic token (web views within Chrome,
/// Edge and Opera within Chrome, the Android browser within Mobile Safari, ...)
/// come before that generic token.
static SIGNATURES: [Signature; 14] = [
    Signature::new(
        BrowserFamily::Edge,
        &[],
        &["Edg/", "Edge/", "EdgA/", "EdgiOS/"],
    ),
    Signature::new(BrowserFamily::Opera, &[], &["OPR/", "OPT/"]),
    // Presto
    Signature::new(
        BrowserFamily::Opera,
        &["Opera"],
        &["Version/", "Opera/", "Opera "],
    ),
    Signature::new(BrowserFamily::SamsungInternet, &[], &["SamsungBrowser/"]),
    Signature::new(BrowserFamily::InternetExplorer, &[], &["MSIE "]),
    Signature::new(BrowserFamily::InternetExplorer, &["Trident/"], &["rv:"]),
    Signature::new(BrowserFamily::ChromeWebView, &["Android", "; wv)"], &["Chrome/"]),
    // pre-Lollipop web views advertise a `Version/4.0` token instead of `wv`
    Signature::new(
        BrowserFamily::ChromeWebView,
        &["Android", "Version/"],
        &["Chrome/"],
    ),
    Signature::new(BrowserFamily::Chromium, &[], &["Chromium/"]),
    Signature::new(BrowserFamily::Chrome, &[], &["Chrome/", "CriOS/"]),
    Signature::new(BrowserFamily::Firefox, &[], &["Firefox/", "FxiOS/"]),
    Signature::new(BrowserFamily::Android, &["AppleWebKit"], &["Android "]),
    Signature::new(
        BrowserFamily::MobileSafari,
        &["Mobile", "Safari/"],
        &["Version/"],
    ),
    Signature::new(BrowserFamily::Safari, &["Safari/"], &["Version/"]),
];

/// All known signatures, in the order in which they are tried.
#[must_use]
pub fn signatures() -> &'static [Signature] {
    &SIGNATURES
}

/// parse the user agent string and return a [`BrowserIdentity`],
/// falling back to [`BrowserIdentity::unknown`] in case no signature matches.
///
/// # Remarks
///
/// NOTE that this function does not aim to be:
///
/// - super accurate: it aims to be fast and good for the families requirement tables use;
/// - complete: we do not care about all the possible user agents out there, only the popular ones.
pub(crate) fn parse_user_agent(ua: &str) -> BrowserIdentity {
    let bytes = truncate(ua);

    let identity = SIGNATURES
        .iter()
        .find_map(|signature| {
            signature
                .match_bytes(bytes)
                .map(|version| BrowserIdentity::new(signature.family, version))
        })
        .unwrap_or_else(BrowserIdentity::unknown);

    tracing::trace!(
        ua.len = ua.len(),
        family = %identity.family(),
        version = %identity.version(),
        "resolved user agent"
    );

    identity
}

fn truncate(ua: &str) -> &[u8] {
    let bytes = ua.as_bytes();
    bytes.get(..MAX_UA_LENGTH).unwrap_or(bytes)
}

/// Read up to three dot separated numeric components from the start of `s`.
///
/// Reading stops at the first byte that does not continue the version,
/// missing trailing components are `0`. Returns `None` if `s` does not start with a digit.
fn parse_version(s: &[u8]) -> Option<Version> {
    let mut components = [0u32; 3];
    let mut rest = s;

    for (index, component) in components.iter_mut().enumerate() {
        if index > 0 {
            match rest {
                [b'.', tail @ ..] if tail.first().is_some_and(u8::is_ascii_digit) => rest = tail,
                _ => break,
            }
        }

        let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if len == 0 {
            return None;
        }
        let (digits, tail) = rest.split_at(len);
        *component = digits.iter().fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        });
        rest = tail;
    }

    let [major, minor, patch] = components;
    Some(Version::new(major, minor, patch))
}
