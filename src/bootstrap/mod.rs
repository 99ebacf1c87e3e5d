//! Page bootstrap policy.
//!
//! Before anything else is rendered, a page asks the [`Gate`] what to do with the
//! browser it runs in:
//!
//! 1. browsers failing the [minimum supported] table are sent to the unsupported page,
//!    and nothing else happens;
//! 2. all others get exactly one stylesheet: the modern one if the browser passes the
//!    [modern font] table, the basic one otherwise.
//!
//! The side effects themselves are performed by the embedder through
//! the [`PageEnvironment`] trait.
//!
//! [minimum supported]: crate::ua::RequirementTable::minimum_supported
//! [modern font]: crate::ua::RequirementTable::modern_font

mod config;
#[doc(inline)]
pub use config::{GateConfig, Stylesheets};

mod env;
#[doc(inline)]
pub use env::PageEnvironment;

mod gate;
#[doc(inline)]
pub use gate::{Gate, GateDecision, StylesheetVariant};
