use super::VersionRequirement;
use crate::{BrowserFamily, BrowserIdentity};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};

/// Minimum version requirements, keyed by [`BrowserFamily`].
///
/// The table is opt-in per family: an identity whose family has no
/// entry in the table is not gated by it and passes unconditionally.
///
/// (De)serializes as a map from family name to requirement:
///
/// ```
/// use uagate_ua::{BrowserFamily, RequirementTable, VersionRequirement};
///
/// let table: RequirementTable = serde_json::from_str(r#"{
///     "IE": { "major": 11 },
///     "Android": "4.0.2"
/// }"#).unwrap();
/// assert_eq!(
///     table.get(BrowserFamily::Android),
///     Some(VersionRequirement::major_minor_patch(4, 0, 2)),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementTable {
    requirements: BTreeMap<BrowserFamily, VersionRequirement>,
}

/// The outcome of evaluating a [`BrowserIdentity`] against a [`RequirementTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "requirement", rename_all = "snake_case")]
pub enum Evaluation {
    /// The table has no entry for the family of the identity.
    Unconstrained,
    /// The identity meets the requirement of its family.
    Satisfied(VersionRequirement),
    /// The identity is older than the requirement of its family.
    Unsatisfied(VersionRequirement),
}

impl Evaluation {
    /// Returns `true` unless the evaluation is [`Evaluation::Unsatisfied`].
    #[must_use]
    pub fn passed(&self) -> bool {
        !matches!(self, Self::Unsatisfied(_))
    }
}

impl RequirementTable {
    /// Create a new empty [`RequirementTable`], which every identity passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used to decide whether a browser is supported at all.
    #[must_use]
    pub fn minimum_supported() -> Self {
        Self::new()
            .with_requirement(BrowserFamily::InternetExplorer, VersionRequirement::major(11))
            .with_requirement(
                BrowserFamily::Android,
                VersionRequirement::major_minor_patch(4, 0, 2),
            )
    }

    /// The table used to decide whether a browser can render the modern font stack.
    #[must_use]
    pub fn modern_font() -> Self {
        Self::new()
            .with_requirement(BrowserFamily::Edge, VersionRequirement::major(17))
            .with_requirement(BrowserFamily::Firefox, VersionRequirement::major(58))
            .with_requirement(BrowserFamily::Chrome, VersionRequirement::major(60))
            .with_requirement(BrowserFamily::ChromeWebView, VersionRequirement::major(60))
            .with_requirement(BrowserFamily::Safari, VersionRequirement::major_minor(11, 1))
            .with_requirement(BrowserFamily::Opera, VersionRequirement::major(47))
            .with_requirement(
                BrowserFamily::MobileSafari,
                VersionRequirement::major_minor(11, 4),
            )
    }

    /// Add or replace the requirement for the given family.
    #[must_use]
    pub fn with_requirement(mut self, family: BrowserFamily, requirement: VersionRequirement) -> Self {
        self.set_requirement(family, requirement);
        self
    }

    /// Add or replace the requirement for the given family.
    pub fn set_requirement(
        &mut self,
        family: BrowserFamily,
        requirement: VersionRequirement,
    ) -> &mut Self {
        self.requirements.insert(family, requirement);
        self
    }

    /// Remove the requirement for the given family, if any.
    pub fn remove_requirement(&mut self, family: BrowserFamily) -> Option<VersionRequirement> {
        self.requirements.remove(&family)
    }

    /// Returns the requirement for the given family, if any.
    #[must_use]
    pub fn get(&self, family: BrowserFamily) -> Option<VersionRequirement> {
        self.requirements.get(&family).copied()
    }

    /// Iterate over the requirements, ordered by family.
    pub fn iter(&self) -> impl Iterator<Item = (BrowserFamily, VersionRequirement)> + '_ {
        self.requirements.iter().map(|(family, req)| (*family, *req))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Evaluate the identity against this table.
    #[must_use]
    pub fn evaluate(&self, identity: &BrowserIdentity) -> Evaluation {
        let evaluation = match self.get(identity.family()) {
            None => Evaluation::Unconstrained,
            Some(requirement) if requirement.is_satisfied_by(&identity.version()) => {
                Evaluation::Satisfied(requirement)
            }
            Some(requirement) => Evaluation::Unsatisfied(requirement),
        };
        tracing::debug!(%identity, ?evaluation, "evaluated browser requirements");
        evaluation
    }

    /// Returns `true` if the identity passes this table.
    ///
    /// Families without an entry always pass, otherwise the
    /// version of the identity has to satisfy the requirement of its family.
    #[must_use]
    pub fn passes(&self, identity: &BrowserIdentity) -> bool {
        self.evaluate(identity).passed()
    }
}

impl FromIterator<(BrowserFamily, VersionRequirement)> for RequirementTable {
    fn from_iter<T: IntoIterator<Item = (BrowserFamily, VersionRequirement)>>(iter: T) -> Self {
        Self {
            requirements: iter.into_iter().collect(),
        }
    }
}

impl Extend<(BrowserFamily, VersionRequirement)> for RequirementTable {
    fn extend<T: IntoIterator<Item = (BrowserFamily, VersionRequirement)>>(&mut self, iter: T) {
        self.requirements.extend(iter);
    }
}

impl IntoIterator for RequirementTable {
    type Item = (BrowserFamily, VersionRequirement);
    type IntoIter = btree_map::IntoIter<BrowserFamily, VersionRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.into_iter()
    }
}
