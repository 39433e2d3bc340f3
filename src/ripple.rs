//! Click ripples on buttons.

use crate::element::{PageElement, Point, Rect};

/// A button that can host ripple overlays.
pub trait RippleHost {
    type Overlay: PageElement;

    /// The button's box in viewport coordinates.
    fn bounds(&self) -> Rect;

    /// Create a detached overlay element.
    fn create_overlay(&self) -> Option<Self::Overlay>;

    /// Remove every child overlay carrying `class`.
    fn remove_overlays(&self, class: &str);

    /// Append an overlay as the button's last child.
    fn append_overlay(&self, overlay: &Self::Overlay);
}

/// Position and size of a ripple relative to its button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Centre a square covering the button on the click point.
    pub fn new(bounds: Rect, click: Point) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            size,
            left: click.x - bounds.left - size / 2.0,
            top: click.y - bounds.top - size / 2.0,
        }
    }

    pub fn apply<E: PageElement>(&self, overlay: &E) {
        let size = format!("{}px", self.size);
        overlay.set_style("width", &size);
        overlay.set_style("height", &size);
        overlay.set_style("left", &format!("{}px", self.left));
        overlay.set_style("top", &format!("{}px", self.top));
    }
}

/// Settings for the ripple effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RippleEffect {
    /// Buttons that ripple when clicked
    pub selector: String,
    pub class: String,
    /// Milliseconds before an overlay removes itself
    pub lifetime_ms: u32,
}

impl Default for RippleEffect {
    fn default() -> Self {
        Self {
            selector: ".college-link-btn, .poster-btn, .app-download-btn, .magazine-btn"
                .to_string(),
            class: "ripple".to_string(),
            lifetime_ms: 600,
        }
    }
}

impl RippleEffect {
    /// Spawn a ripple in `host` for a click at `click`.
    ///
    /// Any previous ripple is removed before the new one is appended, so a
    /// button never holds more than one. The caller schedules removal of the
    /// returned overlay after [`lifetime_ms`](Self::lifetime_ms).
    pub fn spawn<H: RippleHost>(&self, host: &H, click: Point) -> Option<H::Overlay> {
        let geometry = RippleGeometry::new(host.bounds(), click);
        let overlay = host.create_overlay()?;
        geometry.apply(&overlay);
        overlay.add_class(&self.class);

        host.remove_overlays(&self.class);
        host.append_overlay(&overlay);
        log::debug!("ripple spawned ({}px)", geometry.size);
        Some(overlay)
    }
}
