use crate::ua::{Version, parse_dotted_components};
use serde::{Deserialize, Deserializer, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use uagate_error::OpaqueError;

/// A partial minimum version: "at least `major[.minor[.patch]]`".
///
/// Components that are not specified are don't-cares: a requirement of `11`
/// accepts `11.9.9`, while a requirement of `11.4` rejects `11.3.9`.
/// A patch can only be specified together with a minor component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VersionRequirement {
    major: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    minor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patch: Option<u32>,
}

impl VersionRequirement {
    /// Require at least the given major version.
    #[must_use]
    pub const fn major(major: u32) -> Self {
        Self {
            major,
            minor: None,
            patch: None,
        }
    }

    /// Require at least the given `major.minor` version.
    #[must_use]
    pub const fn major_minor(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: None,
        }
    }

    /// Require at least the given `major.minor.patch` version.
    #[must_use]
    pub const fn major_minor_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
        }
    }

    /// Create a [`VersionRequirement`] from optional parts,
    /// failing in case a patch is given without a minor component.
    pub fn try_new(
        major: u32,
        minor: Option<u32>,
        patch: Option<u32>,
    ) -> Result<Self, OpaqueError> {
        match (minor, patch) {
            (None, None) => Ok(Self::major(major)),
            (Some(minor), None) => Ok(Self::major_minor(major, minor)),
            (Some(minor), Some(patch)) => Ok(Self::major_minor_patch(major, minor, patch)),
            (None, Some(patch)) => Err(OpaqueError::from_display(format!(
                "invalid version requirement: patch ({patch}) given without minor for major {major}"
            ))),
        }
    }

    #[must_use]
    pub fn major_version(&self) -> u32 {
        self.major
    }

    #[must_use]
    pub fn minor_version(&self) -> Option<u32> {
        self.minor
    }

    #[must_use]
    pub fn patch_version(&self) -> Option<u32> {
        self.patch
    }

    /// Returns `true` if `version` is at least this requirement,
    /// ignoring the components this requirement does not specify.
    #[must_use]
    pub fn is_satisfied_by(&self, version: &Version) -> bool {
        match version.major.cmp(&self.major) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => match self.minor {
                None => true,
                Some(minor) => match version.minor.cmp(&minor) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => self.patch.is_none_or(|patch| version.patch >= patch),
                },
            },
        }
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{minor}")?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{patch}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionRequirement {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [major, minor, patch] = parse_dotted_components(s)?;
        let major = major.ok_or_else(|| {
            OpaqueError::from_display(format!("invalid version requirement: '{s}'"))
        })?;
        Self::try_new(major, minor, patch)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RequirementRecord {
    major: u32,
    #[serde(default)]
    minor: Option<u32>,
    #[serde(default)]
    patch: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequirementRepr {
    Record(RequirementRecord),
    Text(String),
    Major(u32),
}

impl<'de> Deserialize<'de> for VersionRequirement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RequirementRepr::deserialize(deserializer)? {
            RequirementRepr::Record(RequirementRecord {
                major,
                minor,
                patch,
            }) => Self::try_new(major, minor, patch),
            RequirementRepr::Text(s) => s.parse(),
            RequirementRepr::Major(major) => Ok(Self::major(major)),
        }
        .map_err(serde::de::Error::custom)
    }
}
