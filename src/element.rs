//! The DOM surface the effects write to.

/// Minimal view of a page element.
///
/// Effects only ever touch inline styles, the class list, text content and
/// `data-*` attributes. Keeping that behind a trait lets every effect run
/// against a real `HtmlElement` (with the `web` feature) or an in-memory
/// double in tests.
///
/// All methods take `&self`: DOM handles are shared references to
/// host-owned nodes, so implementations use interior mutability.
pub trait PageElement {
    /// Set an inline style property, e.g. `("opacity", "0")`.
    fn set_style(&self, property: &str, value: &str);

    /// Add a class. Adding a class that is already present is a no-op.
    fn add_class(&self, class: &str);

    /// Remove a class if present.
    fn remove_class(&self, class: &str);

    /// Check class membership.
    fn has_class(&self, class: &str) -> bool;

    /// Current text content (empty when the node has none).
    fn text(&self) -> String;

    /// Replace the text content.
    fn set_text(&self, text: &str);

    /// Set a `data-*` attribute; `key` is the camel-case dataset name.
    fn set_data(&self, key: &str, value: &str);

    /// Set a plain attribute, e.g. `("aria-label", "Back to top")`.
    fn set_attr(&self, name: &str, value: &str);

    /// Replace the inner markup.
    fn set_html(&self, html: &str);

    /// Remove the element from its parent.
    fn detach(&self);
}

/// The document an effect looks elements up in and creates them for.
pub trait PageDocument {
    type Element: PageElement;
    type Error;

    /// First element matching `selector`, if any.
    fn find(&self, selector: &str) -> Result<Option<Self::Element>, Self::Error>;

    /// Create a detached element with the given tag name.
    fn create(&self, tag: &str) -> Result<Self::Element, Self::Error>;

    /// Append an element as the last child of `<body>`.
    fn append_to_body(&self, element: &Self::Element) -> Result<(), Self::Error>;
}

/// An axis-aligned box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A point in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
