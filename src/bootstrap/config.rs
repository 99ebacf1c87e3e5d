use crate::error::{ErrorContext, OpaqueError};
use crate::ua::RequirementTable;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_UNSUPPORTED_URL: &str = "/unsupported/";
const DEFAULT_STYLESHEET_MODERN: &str = "/static/fonts/fonts.modern.css";
const DEFAULT_STYLESHEET_BASIC: &str = "/static/fonts/fonts.basic.css";

/// Configuration of a [`Gate`].
///
/// All fields are optional in the serialized form and fall back to their
/// [`Default`] value, which for the tables are the built-in
/// [`RequirementTable::minimum_supported`] and [`RequirementTable::modern_font`].
///
/// ```
/// use uagate::bootstrap::GateConfig;
/// use uagate::ua::BrowserFamily;
///
/// let config = GateConfig::from_json_str(r#"{
///     "unsupported_url": "/browser-not-supported",
///     "minimum_supported": { "IE": { "major": 11 } }
/// }"#).unwrap();
/// assert_eq!(config.unsupported_url, "/browser-not-supported");
/// assert!(config.minimum_supported.get(BrowserFamily::Android).is_none());
/// assert_eq!(config.modern_font.len(), 7);
/// ```
///
/// [`Gate`]: super::Gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Browsers failing this table are redirected to [`GateConfig::unsupported_url`].
    pub minimum_supported: RequirementTable,
    /// Browsers passing this table receive the modern stylesheet.
    pub modern_font: RequirementTable,
    /// Where unsupported browsers are navigated to.
    pub unsupported_url: String,
    pub stylesheets: Stylesheets,
}

/// The two stylesheet variants a [`Gate`] chooses between.
///
/// [`Gate`]: super::Gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stylesheets {
    pub modern: String,
    pub basic: String,
}

impl Default for Stylesheets {
    fn default() -> Self {
        Self {
            modern: DEFAULT_STYLESHEET_MODERN.to_owned(),
            basic: DEFAULT_STYLESHEET_BASIC.to_owned(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            minimum_supported: RequirementTable::minimum_supported(),
            modern_font: RequirementTable::modern_font(),
            unsupported_url: DEFAULT_UNSUPPORTED_URL.to_owned(),
            stylesheets: Stylesheets::default(),
        }
    }
}

impl GateConfig {
    /// Parse and validate a [`GateConfig`] from a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, OpaqueError> {
        let config: Self = serde_json::from_str(s).context("parse gate config json")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a [`GateConfig`] from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OpaqueError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read gate config file '{}'", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("load gate config file '{}'", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            minimum_supported = config.minimum_supported.len(),
            modern_font = config.modern_font.len(),
            "loaded gate config"
        );
        Ok(config)
    }

    /// Check that none of the urls are empty.
    pub fn validate(&self) -> Result<(), OpaqueError> {
        for (name, value) in [
            ("unsupported_url", &self.unsupported_url),
            ("stylesheets.modern", &self.stylesheets.modern),
            ("stylesheets.basic", &self.stylesheets.basic),
        ] {
            if value.trim().is_empty() {
                return Err(OpaqueError::from_display(format!(
                    "invalid gate config: {name} is empty"
                )));
            }
        }
        Ok(())
    }
}
