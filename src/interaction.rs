//! Stateless pointer, scroll and load effects.

use crate::element::PageElement;

/// Lift cards under the pointer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HoverLift {
    pub selector: String,
    /// Transform while hovered
    pub raised: String,
    /// Transform after the pointer leaves
    pub resting: String,
}

impl Default for HoverLift {
    fn default() -> Self {
        Self {
            selector: ".achievement-card, .practice-card, .magazine-card".to_string(),
            raised: "translateY(-8px) scale(1.02)".to_string(),
            resting: "translateY(0) scale(1)".to_string(),
        }
    }
}

impl HoverLift {
    pub fn enter<E: PageElement>(&self, card: &E) {
        card.set_style("transform", &self.raised);
    }

    pub fn leave<E: PageElement>(&self, card: &E) {
        card.set_style("transform", &self.resting);
    }
}

/// Scroll the hero slower than the page.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parallax {
    pub selector: String,
    /// Fraction of the scroll offset applied as a downward shift
    pub factor: f64,
}

impl Default for Parallax {
    fn default() -> Self {
        Self {
            selector: ".hero".to_string(),
            factor: 0.5,
        }
    }
}

impl Parallax {
    #[inline]
    pub fn offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.factor
    }

    pub fn apply<E: PageElement>(&self, hero: &E, scroll_y: f64) {
        hero.set_style("transform", &format!("translateY({}px)", self.offset(scroll_y)));
    }
}

/// Fade out and drop the page loading overlay.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageLoader {
    pub selector: String,
    /// Delay before the fade starts
    pub delay_ms: u32,
    /// Fade length; the overlay is removed once it ends
    pub fade_ms: u32,
}

impl Default for PageLoader {
    fn default() -> Self {
        Self {
            selector: ".page-loader".to_string(),
            delay_ms: 500,
            fade_ms: 300,
        }
    }
}

/// One timed step of the loader's exit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderStep {
    Fade,
    Remove,
}

impl PageLoader {
    /// The exit sequence as `(delay after the previous step, step)` pairs.
    pub fn steps(&self) -> [(u32, LoaderStep); 2] {
        [
            (self.delay_ms, LoaderStep::Fade),
            (self.fade_ms, LoaderStep::Remove),
        ]
    }

    pub fn begin_fade<E: PageElement>(&self, loader: &E) {
        loader.set_style("opacity", "0");
    }

    pub fn apply<E: PageElement>(&self, loader: &E, step: LoaderStep) {
        match step {
            LoaderStep::Fade => self.begin_fade(loader),
            LoaderStep::Remove => loader.detach(),
        }
    }
}

/// Smooth scrolling for same-page anchors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SmoothScroll {
    pub enabled: bool,
    pub selector: String,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            enabled: true,
            selector: r##"a[href^="#"]"##.to_string(),
        }
    }
}

impl SmoothScroll {
    /// The selector to scroll to for a clicked anchor's `href`.
    ///
    /// Bare `#` and empty links keep their default behaviour.
    pub fn target<'a>(&self, href: &'a str) -> Option<&'a str> {
        match href {
            "" | "#" => None,
            _ => Some(href),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockElement;

    #[test]
    fn test_hover_round_trip() {
        let hover = HoverLift::default();
        let card = MockElement::new();
        hover.enter(&card);
        assert_eq!(card.style("transform").as_deref(), Some("translateY(-8px) scale(1.02)"));
        hover.leave(&card);
        assert_eq!(card.style("transform").as_deref(), Some("translateY(0) scale(1)"));
    }

    #[test]
    fn test_parallax_transform() {
        let parallax = Parallax::default();
        let hero = MockElement::new();
        parallax.apply(&hero, 300.0);
        assert_eq!(hero.style("transform").as_deref(), Some("translateY(150px)"));
        parallax.apply(&hero, 0.0);
        assert_eq!(hero.style("transform").as_deref(), Some("translateY(0px)"));
    }

    #[test]
    fn test_loader_fade() {
        let loader = MockElement::new();
        PageLoader::default().begin_fade(&loader);
        assert_eq!(loader.style("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn test_loader_fades_then_removes() {
        let settings = PageLoader::default();
        assert_eq!(
            settings.steps(),
            [(500, LoaderStep::Fade), (300, LoaderStep::Remove)]
        );

        let loader = MockElement::new();
        let [(_, first), (_, second)] = settings.steps();
        settings.apply(&loader, first);
        assert_eq!(loader.style("opacity").as_deref(), Some("0"));
        assert!(!loader.is_detached());

        settings.apply(&loader, second);
        assert!(loader.is_detached());
    }

    #[test]
    fn test_anchor_targets() {
        let scroll = SmoothScroll::default();
        assert_eq!(scroll.target("#about"), Some("#about"));
        assert_eq!(scroll.target("#"), None);
        assert_eq!(scroll.target(""), None);
    }
}
