//! User Agent (UA) parser and minimum version requirements.
//!
//! This crate provides a parser ([`BrowserIdentity::parse`]) that turns a `User-Agent`
//! string into a browser family and a `major.minor.patch` version, as well as
//! a [`RequirementTable`] that decides whether such an identity is recent enough.
//!
//! ```
//! use uagate_ua::{BrowserFamily, BrowserIdentity, RequirementTable, VersionRequirement};
//!
//! let identity = BrowserIdentity::parse(
//!     "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/59.0.3071.86 Safari/537.36",
//! );
//! assert_eq!(identity.family(), BrowserFamily::Chrome);
//!
//! let table = RequirementTable::new()
//!     .with_requirement(BrowserFamily::Chrome, VersionRequirement::major(60));
//! assert!(!table.passes(&identity));
//! ```
//!
//! # Remarks
//!
//! We classify only the families that minimum version tables care about, and we do not
//! classify all User Agents:
//!
//! - mobile and embedded variants are families of their own (e.g. [`BrowserFamily::ChromeWebView`]
//!   and [`BrowserFamily::MobileSafari`]), as requirement tables key on them independently;
//! - anything not recognised resolves to [`BrowserFamily::Unknown`] with version `0.0.0`.
//!
//! Parsing never fails. A table without an entry for the family of an identity
//! does not gate that identity at all.
//!
//! # uagate
//!
//! Crate used by the end-user `uagate` crate and `uagate` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod ua;
pub use ua::*;

mod requirement;
pub use requirement::*;
