//! Scroll-triggered fade-ins.

use crate::element::PageElement;

/// How a revealed element is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RevealMode {
    /// Hide with inline styles up front, restore them on reveal
    #[default]
    Fade,
    /// Leave the element alone and add a class on reveal
    Class,
}

/// Settings for the reveal effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Reveal {
    /// Elements to reveal
    pub selector: String,
    /// Visible fraction required before revealing
    pub threshold: f64,
    pub mode: RevealMode,
    /// Class added in [`RevealMode::Class`]
    pub class: String,
    /// Offset the element starts from in [`RevealMode::Fade`]
    pub hidden_transform: String,
    pub transition: String,
    /// Skip the effect on devices reporting fewer logical cores
    pub min_hardware_concurrency: Option<u32>,
}

impl Default for Reveal {
    fn default() -> Self {
        Self {
            selector: ".achievement-card".to_string(),
            threshold: 0.15,
            mode: RevealMode::Fade,
            class: "animate-on-scroll".to_string(),
            hidden_transform: "translateY(20px)".to_string(),
            transition: "opacity 0.4s ease, transform 0.4s ease".to_string(),
            min_hardware_concurrency: Some(4),
        }
    }
}

impl Reveal {
    /// Whether the effect should run given the reported core count.
    ///
    /// Hosts that do not report a core count are treated as capable.
    pub fn enabled_for(&self, hardware_concurrency: Option<u32>) -> bool {
        match (self.min_hardware_concurrency, hardware_concurrency) {
            (Some(min), Some(cores)) if cores > 0 => cores >= min,
            _ => true,
        }
    }

    /// Put an element in its pre-reveal state.
    pub fn prepare<E: PageElement>(&self, element: &E) {
        if self.mode == RevealMode::Fade {
            element.set_style("opacity", "0");
            element.set_style("transform", &self.hidden_transform);
            element.set_style("transition", &self.transition);
        }
    }

    /// Show an element that entered the viewport.
    pub fn show<E: PageElement>(&self, element: &E) {
        match self.mode {
            RevealMode::Fade => {
                element.set_style("opacity", "1");
                element.set_style("transform", "translateY(0)");
            }
            RevealMode::Class => element.add_class(&self.class),
        }
    }
}
