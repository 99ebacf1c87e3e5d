use super::{GateConfig, PageEnvironment};
use crate::error::{ErrorContext, OpaqueError};
use crate::ua::BrowserIdentity;
use serde::Serialize;
use std::fmt;

/// Which of the two configured stylesheets a browser receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StylesheetVariant {
    /// The browser passes the modern font table.
    Modern,
    /// The browser is supported, but not recent enough for the modern font stack.
    Basic,
}

impl StylesheetVariant {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Basic => "basic",
        }
    }
}

impl fmt::Display for StylesheetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a [`Gate`] decided for a [`BrowserIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    /// The browser fails the minimum supported table and is sent away.
    Unsupported { redirect: String },
    /// The browser is supported and receives exactly one stylesheet.
    Stylesheet {
        variant: StylesheetVariant,
        href: String,
    },
}

impl GateDecision {
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Stylesheet { .. })
    }
}

/// The page bootstrap policy.
///
/// See [the module docs](super) for the decision procedure.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    config: GateConfig,
}

impl Gate {
    /// Create a new [`Gate`] for the given [`GateConfig`].
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    /// Returns the [`GateConfig`] of this [`Gate`].
    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide what to do with the given identity, without any side effects.
    #[must_use]
    pub fn decide(&self, identity: &BrowserIdentity) -> GateDecision {
        if !self.config.minimum_supported.passes(identity) {
            return GateDecision::Unsupported {
                redirect: self.config.unsupported_url.clone(),
            };
        }

        if self.config.modern_font.passes(identity) {
            GateDecision::Stylesheet {
                variant: StylesheetVariant::Modern,
                href: self.config.stylesheets.modern.clone(),
            }
        } else {
            GateDecision::Stylesheet {
                variant: StylesheetVariant::Basic,
                href: self.config.stylesheets.basic.clone(),
            }
        }
    }

    /// Decide for the browser of the given [`PageEnvironment`] and apply the decision to it.
    ///
    /// Exactly one side effect is performed: either a single navigation
    /// to the unsupported url, or a single stylesheet injection.
    /// A missing `User-Agent` is treated as an empty one.
    pub fn run<E>(&self, env: &mut E) -> Result<GateDecision, OpaqueError>
    where
        E: PageEnvironment + ?Sized,
    {
        let identity = BrowserIdentity::parse(env.user_agent().unwrap_or_default());
        let decision = self.decide(&identity);

        match &decision {
            GateDecision::Unsupported { redirect } => {
                tracing::info!(%identity, %redirect, "unsupported browser: navigate away");
                env.navigate(redirect)
                    .map_err(OpaqueError::from_boxed)
                    .with_context(|| format!("navigate to unsupported url '{redirect}'"))?;
            }
            GateDecision::Stylesheet { variant, href } => {
                tracing::debug!(%identity, %variant, %href, "inject stylesheet");
                env.inject_stylesheet(href)
                    .map_err(OpaqueError::from_boxed)
                    .with_context(|| format!("inject {variant} stylesheet '{href}'"))?;
            }
        }

        Ok(decision)
    }
}
