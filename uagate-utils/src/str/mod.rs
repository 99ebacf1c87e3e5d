//! string utilities

mod search;
#[doc(inline)]
pub use search::{
    all_submatch_ignore_ascii_case, contains_ignore_ascii_case, submatch_ignore_ascii_case,
};
