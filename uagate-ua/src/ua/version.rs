use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uagate_error::{ErrorContext as _, OpaqueError};

/// A fully resolved `major.minor.patch` browser version.
///
/// Components that are absent from a `User-Agent` string are `0`.
/// Versions are ordered lexicographically, major first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
    /// Patch version component.
    pub patch: u32,
}

impl Version {
    /// The `0.0.0` version, as used for unknown browsers.
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Create a new [`Version`].
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = OpaqueError;

    /// Parse `1`, `1.2` or `1.2.3`, missing components default to `0`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [major, minor, patch] = parse_dotted_components(s)?;
        Ok(Self::new(
            major.unwrap_or_default(),
            minor.unwrap_or_default(),
            patch.unwrap_or_default(),
        ))
    }
}

/// Parse a dotted version of one up to three numeric components.
pub(crate) fn parse_dotted_components(s: &str) -> Result<[Option<u32>; 3], OpaqueError> {
    let s = s.trim();
    let mut components = [None; 3];
    let mut parts = s.split('.');

    for (index, slot) in components.iter_mut().enumerate() {
        let Some(part) = parts.next() else {
            break;
        };
        let value = part
            .parse::<u32>()
            .with_context(|| format!("invalid version component #{index} in '{s}'"))?;
        *slot = Some(value);
    }

    if parts.next().is_some() {
        return Err(OpaqueError::from_display(format!(
            "invalid version '{s}': at most three components are supported"
        )));
    }

    Ok(components)
}
