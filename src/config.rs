//! Page-wide effect configuration.

use thiserror::Error;

use crate::back_to_top::BackToTop;
use crate::counter::CounterEffect;
use crate::interaction::{HoverLift, PageLoader, Parallax, SmoothScroll};
use crate::reveal::{Reveal, RevealMode};
use crate::ripple::RippleEffect;

/// Error type for invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A visibility threshold outside 0.0 - 1.0
    #[error("{name} threshold must be within 0.0..=1.0, got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    /// A non-finite scale factor
    #[error("{name} factor must be finite, got {value}")]
    InvalidFactor { name: &'static str, value: f64 },
    #[cfg(feature = "toml")]
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings for every effect installed on a page.
///
/// Optional sections are disabled when absent. All fields fall back to
/// their defaults when deserialized, so a partial file only needs the
/// values it changes:
///
/// ```toml
/// [counters]
/// duration_ms = 2000.0
///
/// [parallax]
/// factor = 0.3
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnhanceConfig {
    pub reveal: Reveal,
    pub counters: CounterEffect,
    pub back_to_top: BackToTop,
    pub ripple: RippleEffect,
    pub smooth_scroll: SmoothScroll,
    pub hover: Option<HoverLift>,
    pub parallax: Option<Parallax>,
    pub loader: Option<PageLoader>,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            reveal: Reveal::default(),
            counters: CounterEffect::default(),
            back_to_top: BackToTop::default(),
            ripple: RippleEffect::default(),
            smooth_scroll: SmoothScroll::default(),
            hover: None,
            parallax: None,
            loader: None,
        }
    }
}

impl EnhanceConfig {
    /// Every effect enabled, revealing cards and metrics by class.
    pub fn extended() -> Self {
        Self {
            reveal: Reveal {
                selector: ".achievement-card, .practice-card, .magazine-card, .metric-item"
                    .to_string(),
                threshold: 0.1,
                mode: RevealMode::Class,
                min_hardware_concurrency: None,
                ..Reveal::default()
            },
            counters: CounterEffect {
                duration_ms: 2000.0,
                ..CounterEffect::default()
            },
            hover: Some(HoverLift::default()),
            parallax: Some(Parallax::default()),
            loader: Some(PageLoader::default()),
            ..Self::default()
        }
    }

    /// Parse a TOML document into a validated configuration.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the browser would otherwise reject or misuse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("reveal", self.reveal.threshold)?;
        check_threshold("counters", self.counters.threshold)?;
        if let Some(parallax) = &self.parallax {
            if !parallax.factor.is_finite() {
                return Err(ConfigError::InvalidFactor {
                    name: "parallax",
                    value: parallax.factor,
                });
            }
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}
