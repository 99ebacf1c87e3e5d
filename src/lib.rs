//! 🚦 uagate decides, from nothing more than a `User-Agent` string, whether a browser
//! is supported at all and which stylesheet it should receive.
//!
//! The crate is split in a couple of small building blocks:
//!
//! | module | purpose |
//! |-|-|
//! | [`ua`] | parse a `User-Agent` into a [`BrowserIdentity`](crate::ua::BrowserIdentity) and check it against a [`RequirementTable`](crate::ua::RequirementTable) |
//! | [`bootstrap`] | the page bootstrap policy: redirect unsupported browsers, pick the modern or basic stylesheet for the others |
//! | [`error`] | error types used at the edges (configuration, side effects) |
//! | [`utils`] | ASCII case-insensitive string helpers |
//!
//! Parsing and evaluation never fail. Browsers that are not recognised resolve to the
//! `Unknown` family, which only fails tables that explicitly list it.
//!
//! # Example
//!
//! ```
//! use uagate::bootstrap::{Gate, GateConfig, GateDecision, StylesheetVariant};
//! use uagate::ua::BrowserIdentity;
//!
//! let gate = Gate::new(GateConfig::default());
//!
//! let identity = BrowserIdentity::parse(
//!     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/61.0.3163.100 Safari/537.36",
//! );
//! assert!(matches!(
//!     gate.decide(&identity),
//!     GateDecision::Stylesheet { variant: StylesheetVariant::Modern, .. },
//! ));
//! ```
//!
//! The [`uagate` binary](https://github.com/plabayo/uagate/tree/main/uagate-cli) can be used to
//! try out user agents and configurations from the command line.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::uagate_error as error;

#[doc(inline)]
pub use ::uagate_ua as ua;

#[doc(inline)]
pub use ::uagate_utils as utils;

pub mod bootstrap;
