mod family;
pub use family::BrowserFamily;

mod version;
pub use version::Version;
pub(crate) use version::parse_dotted_components;

mod info;
pub use info::BrowserIdentity;

mod parse;
pub use parse::{Signature, signatures};
use parse::parse_user_agent;

/// Parse a `User-Agent` string into a [`BrowserIdentity`].
///
/// Shorthand for [`BrowserIdentity::parse`].
#[must_use]
pub fn parse(ua: &str) -> BrowserIdentity {
    parse_user_agent(ua)
}

#[cfg(test)]
mod parse_tests;
