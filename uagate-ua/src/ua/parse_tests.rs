use crate::ua::{BrowserFamily, BrowserIdentity, Version, signatures};
use quickcheck_macros::quickcheck;

fn assert_identity(ua: &str, family: BrowserFamily, version: (u32, u32, u32)) {
    let identity = BrowserIdentity::parse(ua);
    assert_eq!(
        identity,
        BrowserIdentity::new(family, version.into()),
        "ua: {ua}"
    );
}

#[test]
fn test_parse_empty_ua() {
    let identity = BrowserIdentity::parse("");
    assert!(identity.is_unknown());
    assert_eq!(identity.version(), Version::ZERO);
}

#[test]
fn test_parse_garbage_ua() {
    for ua in [
        "garbage-unknown-ua-12345",
        "curl/8.4.0",
        "Mozilla/5.0",
        "Chrome",
        "Safari/604.1",
        "Version/11.1",
        "Chrome/",
        "Firefox/beta",
        "\u{1F999}/1.2.3",
    ] {
        assert_eq!(BrowserIdentity::parse(ua), BrowserIdentity::unknown(), "ua: {ua}");
    }
}

#[test]
fn test_parse_chrome() {
    assert_identity(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/59.0.3071.86 Safari/537.36",
        BrowserFamily::Chrome,
        (59, 0, 3071),
    );
    assert_identity(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        BrowserFamily::Chrome,
        (124, 0, 0),
    );
    assert_identity(
        "Mozilla/5.0 (Linux; Android 8.0.0; SM-G960F Build/R16NW) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/62.0.3202.84 Mobile Safari/537.36",
        BrowserFamily::Chrome,
        (62, 0, 3202),
    );
}

#[test]
fn test_parse_chrome_ios() {
    assert_identity(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 11_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) CriOS/67.0.3396.87 Mobile/15E148 Safari/604.1",
        BrowserFamily::Chrome,
        (67, 0, 3396),
    );
}

#[test]
fn test_parse_chrome_webview() {
    assert_identity(
        "Mozilla/5.0 (Linux; Android 5.1.1; Nexus 5 Build/LMY48B; wv) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/43.0.2357.65 Mobile Safari/537.36",
        BrowserFamily::ChromeWebView,
        (43, 0, 2357),
    );
    assert_identity(
        "Mozilla/5.0 (Linux; Android 9; Pixel 3 Build/PQ1A.181105.017.A1; wv) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0.3538.110 Mobile Safari/537.36",
        BrowserFamily::ChromeWebView,
        (70, 0, 3538),
    );
}

#[test]
fn test_parse_chrome_webview_pre_lollipop() {
    assert_identity(
        "Mozilla/5.0 (Linux; Android 4.4; Nexus 5 Build/_BuildID_) AppleWebKit/537.36 (KHTML, like Gecko) Version/4.0 Chrome/30.0.0.0 Mobile Safari/537.36",
        BrowserFamily::ChromeWebView,
        (30, 0, 0),
    );
}

#[test]
fn test_parse_chromium() {
    assert_identity(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Ubuntu Chromium/65.0.3325.181 Chrome/65.0.3325.181 Safari/537.36",
        BrowserFamily::Chromium,
        (65, 0, 3325),
    );
}

#[test]
fn test_parse_edge() {
    assert_identity(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/64.0.3282.140 Safari/537.36 Edge/17.17134",
        BrowserFamily::Edge,
        (17, 17134, 0),
    );
    assert_identity(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91",
        BrowserFamily::Edge,
        (120, 0, 2210),
    );
    assert_identity(
        "Mozilla/5.0 (Linux; Android 10; HD1913) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.116 Mobile Safari/537.36 EdgA/120.0.2210.115",
        BrowserFamily::Edge,
        (120, 0, 2210),
    );
}

#[test]
fn test_parse_firefox() {
    assert_identity(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:58.0) Gecko/20100101 Firefox/58.0",
        BrowserFamily::Firefox,
        (58, 0, 0),
    );
    assert_identity(
        "Mozilla/5.0 (Android 4.4; Mobile; rv:41.0) Gecko/41.0 Firefox/41.0",
        BrowserFamily::Firefox,
        (41, 0, 0),
    );
    assert_identity(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 12_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) FxiOS/13.2b11866 Mobile/16A366 Safari/605.1.15",
        BrowserFamily::Firefox,
        (13, 2, 0),
    );
}

#[test]
fn test_parse_safari() {
    assert_identity(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.1 Safari/605.1.15",
        BrowserFamily::Safari,
        (11, 1, 0),
    );
    assert_identity(
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15",
        BrowserFamily::Safari,
        (17, 4, 1),
    );
}

#[test]
fn test_parse_mobile_safari() {
    assert_identity(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 11_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.4 Mobile/15E148 Safari/604.1",
        BrowserFamily::MobileSafari,
        (11, 4, 0),
    );
    assert_identity(
        "Mozilla/5.0 (iPad; CPU OS 11_3 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/11.0 Mobile/15E148 Safari/604.1",
        BrowserFamily::MobileSafari,
        (11, 0, 0),
    );
}

#[test]
fn test_parse_opera() {
    assert_identity(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/60.0.3112.90 Safari/537.36 OPR/47.0.2631.80",
        BrowserFamily::Opera,
        (47, 0, 2631),
    );
    assert_identity(
        "Opera/9.80 (Windows NT 6.1; WOW64) Presto/2.12.388 Version/12.16",
        BrowserFamily::Opera,
        (12, 16, 0),
    );
    assert_identity(
        "Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; en) Opera 8.50",
        BrowserFamily::Opera,
        (8, 50, 0),
    );
}

#[test]
fn test_parse_ie() {
    assert_identity(
        "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; AS; rv:11.0) like Gecko",
        BrowserFamily::InternetExplorer,
        (11, 0, 0),
    );
    assert_identity(
        "Mozilla/5.0 (compatible; MSIE 10.0; Windows NT 6.1; Trident/6.0)",
        BrowserFamily::InternetExplorer,
        (10, 0, 0),
    );
    assert_identity(
        "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)",
        BrowserFamily::InternetExplorer,
        (8, 0, 0),
    );
}

#[test]
fn test_parse_android_browser() {
    assert_identity(
        "Mozilla/5.0 (Linux; U; Android 4.0.1; en-us; Galaxy Nexus Build/ICL53F) AppleWebKit/534.30 (KHTML, like Gecko) Version/4.0 Mobile Safari/534.30",
        BrowserFamily::Android,
        (4, 0, 1),
    );
    assert_identity(
        "Mozilla/5.0 (Linux; U; Android 2.3.5; en-us; HTC Vision Build/GRI40) AppleWebKit/533.1 (KHTML, like Gecko) Version/4.0 Mobile Safari/533.1",
        BrowserFamily::Android,
        (2, 3, 5),
    );
}

#[test]
fn test_parse_samsung_internet() {
    assert_identity(
        "Mozilla/5.0 (Linux; Android 9; SAMSUNG SM-G960F Build/PPR1.180610.011) AppleWebKit/537.36 (KHTML, like Gecko) SamsungBrowser/9.2 Chrome/67.0.3396.87 Mobile Safari/537.36",
        BrowserFamily::SamsungInternet,
        (9, 2, 0),
    );
}

#[test]
fn test_parse_is_case_insensitive() {
    assert_identity(
        "mozilla/5.0 (x11; linux x86_64) applewebkit/537.36 chrome/61.0.0.0 safari/537.36",
        BrowserFamily::Chrome,
        (61, 0, 0),
    );
}

#[test]
fn test_parse_specific_signature_wins_over_generic() {
    // each of these also contains `Chrome/` and `Safari/`
    for (ua, family) in [
        (
            "Mozilla/5.0 (Linux; Android 9; wv) AppleWebKit/537.36 Chrome/70.0 Mobile Safari/537.36",
            BrowserFamily::ChromeWebView,
        ),
        (
            "Mozilla/5.0 AppleWebKit/537.36 Chrome/64.0 Safari/537.36 Edge/17.17134",
            BrowserFamily::Edge,
        ),
        (
            "Mozilla/5.0 AppleWebKit/537.36 Chrome/60.0 Safari/537.36 OPR/47.0",
            BrowserFamily::Opera,
        ),
    ] {
        assert_eq!(BrowserIdentity::parse(ua).family(), family, "ua: {ua}");
    }

    // Mobile Safari is a superset of desktop Safari
    assert_eq!(
        BrowserIdentity::parse("AppleWebKit/605.1.15 Version/11.4 Mobile/15E148 Safari/604.1")
            .family(),
        BrowserFamily::MobileSafari
    );
    // the stock Android browser is a superset of Mobile Safari
    assert_eq!(
        BrowserIdentity::parse("(Linux; Android 4.0.1) AppleWebKit/534.30 Version/4.0 Mobile Safari/534.30")
            .family(),
        BrowserFamily::Android
    );
}

#[test]
fn test_parse_too_long_ua() {
    let ua = " ".repeat(512) + "Chrome/60.0.0";
    assert!(BrowserIdentity::parse(&ua).is_unknown());

    let ua = "Chrome/60.0.0".to_owned() + &" ".repeat(512);
    assert_identity(&ua, BrowserFamily::Chrome, (60, 0, 0));
}

#[test]
fn test_parse_module_shorthand() {
    let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:58.0) Gecko/20100101 Firefox/58.0";
    assert_eq!(crate::parse(ua), BrowserIdentity::parse(ua));
}

#[test]
fn test_each_signature_in_isolation() {
    // one representative (minimal) UA per signature, in signature order
    let fixtures = [
        "Edg/120.1.2",
        "OPR/47.1.2",
        "Opera/9.80 Version/12.1.2",
        "SamsungBrowser/9.1.2",
        "compatible; MSIE 10.1.2;",
        "Trident/7.0; rv:11.1.2",
        "Android 9; wv) Chrome/70.1.2",
        "Android 4.4; Version/4.0 Chrome/30.1.2",
        "Chromium/65.1.2",
        "Chrome/59.1.2",
        "Firefox/58.1.2",
        "Android 4.1.2; AppleWebKit/534.30",
        "Version/11.1.2 Mobile/15E148 Safari/604.1",
        "Version/11.1.2 Safari/605.1.15",
    ];
    assert_eq!(fixtures.len(), signatures().len());

    for (signature, ua) in signatures().iter().zip(fixtures) {
        let version = signature
            .matches(ua)
            .unwrap_or_else(|| panic!("{signature:?} should match {ua}"));
        assert_eq!(version.minor, 1, "{signature:?} on {ua}");
        assert_eq!(version.patch, 2, "{signature:?} on {ua}");
        assert_eq!(
            BrowserIdentity::parse(ua).family(),
            signature.family(),
            "ua: {ua}"
        );
    }
}

#[quickcheck]
fn parse_is_total_and_deterministic(ua: String) -> bool {
    let identity = BrowserIdentity::parse(&ua);
    identity == BrowserIdentity::parse(&ua)
        && (!identity.is_unknown() || identity.version() == Version::ZERO)
}

#[quickcheck]
fn parse_extracts_chrome_version(major: u32, minor: u32, patch: u32) -> bool {
    let ua = format!(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{major}.{minor}.{patch}.0 Safari/537.36"
    );
    BrowserIdentity::parse(&ua)
        == BrowserIdentity::new(BrowserFamily::Chrome, Version::new(major, minor, patch))
}
