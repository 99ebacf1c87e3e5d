//! Error types for uagate.
//!
//! The [`BoxError`] type is a type-erased error type that can be used to represent any error that
//! implements the `std::error::Error` trait and is used for cases where it is usually not
//! that important what specific error type is returned, but rather that an error occurred.
//!
//! The user-agent parser and requirement evaluator never fail. Errors only show up
//! at the edges: parsing configuration, parsing family or version strings and
//! the side effects performed by the embedder of the gate.
//!
//! # uagate
//!
//! Crate used by the end-user `uagate` crate and `uagate` crate authors alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::error::Error as StdError;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

mod opaque;
#[doc(inline)]
pub use opaque::OpaqueError;

mod context;
#[doc(inline)]
pub use context::ErrorContext;
