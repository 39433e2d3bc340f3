//! Floating "back to top" button.

use crate::element::{PageDocument, PageElement};

/// Settings and visibility logic for the back-to-top button.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BackToTop {
    /// Class identifying an existing button (and given to a created one)
    pub class_name: String,
    /// Scroll offset in pixels past which the button shows
    pub offset: f64,
    pub visible_class: String,
    pub aria_label: String,
    /// Markup placed inside a created button
    pub icon_html: String,
}

impl Default for BackToTop {
    fn default() -> Self {
        Self {
            class_name: "back-to-top".to_string(),
            offset: 300.0,
            visible_class: "visible".to_string(),
            aria_label: "Back to top".to_string(),
            icon_html: r#"<i class="fas fa-arrow-up"></i>"#.to_string(),
        }
    }
}

impl BackToTop {
    /// Selector matching the button.
    pub fn selector(&self) -> String {
        format!(".{}", self.class_name)
    }

    /// Reuse the page's button, or create one and append it to `<body>`.
    ///
    /// Calling this repeatedly yields the same button.
    pub fn ensure<D: PageDocument>(&self, document: &D) -> Result<D::Element, D::Error> {
        if let Some(existing) = document.find(&self.selector())? {
            return Ok(existing);
        }

        let button = document.create("button")?;
        button.add_class(&self.class_name);
        button.set_html(&self.icon_html);
        button.set_attr("aria-label", &self.aria_label);
        document.append_to_body(&button)?;
        log::debug!("created back-to-top button");
        Ok(button)
    }

    #[inline]
    pub fn is_visible(&self, scroll_y: f64) -> bool {
        scroll_y > self.offset
    }

    /// Sync the button's visibility class with the scroll offset.
    pub fn update<E: PageElement>(&self, button: &E, scroll_y: f64) {
        if self.is_visible(scroll_y) {
            button.add_class(&self.visible_class);
        } else {
            button.remove_class(&self.visible_class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockDocument, MockElement};

    #[test]
    fn test_threshold_is_exclusive() {
        let btn = BackToTop::default();
        assert!(!btn.is_visible(0.0));
        assert!(!btn.is_visible(300.0));
        assert!(btn.is_visible(300.5));
    }

    #[test]
    fn test_update_is_idempotent() {
        let btn = BackToTop::default();
        let el = MockElement::new();

        for _ in 0..3 {
            btn.update(&el, 450.0);
            assert_eq!(el.classes(), vec!["visible".to_string()]);
        }
        for _ in 0..3 {
            btn.update(&el, 120.0);
            assert!(el.classes().is_empty());
        }
    }

    #[test]
    fn test_ensure_creates_once() {
        let btn = BackToTop::default();
        let document = MockDocument::new();

        let first = btn.ensure(&document).unwrap();
        let second = btn.ensure(&document).unwrap();

        assert_eq!(document.body_len(), 1);
        assert!(std::rc::Rc::ptr_eq(&first, &second));
        assert_eq!(first.attr("aria-label").as_deref(), Some("Back to top"));
        assert_eq!(first.html(), r#"<i class="fas fa-arrow-up"></i>"#);
        assert!(first.has_class("back-to-top"));
    }

    #[test]
    fn test_ensure_reuses_existing_button() {
        let btn = BackToTop::default();
        let document = MockDocument::new();
        let existing = document.add_to_body(&["back-to-top"]);

        let found = btn.ensure(&document).unwrap();
        assert!(std::rc::Rc::ptr_eq(&existing, &found));
        assert_eq!(document.body_len(), 1);
        assert_eq!(found.attr("aria-label"), None);
    }

    #[test]
    fn test_selector() {
        assert_eq!(BackToTop::default().selector(), ".back-to-top");
    }
}
