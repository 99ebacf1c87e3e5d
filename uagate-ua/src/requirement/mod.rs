//! Minimum version requirements, per browser family.

mod version;
pub use version::VersionRequirement;

mod table;
pub use table::{Evaluation, RequirementTable};

use crate::BrowserIdentity;

/// Returns `true` if the `identity` passes the requirements in `table`.
///
/// Shorthand for [`RequirementTable::passes`].
#[must_use]
pub fn passes(identity: &BrowserIdentity, table: &RequirementTable) -> bool {
    table.passes(identity)
}
