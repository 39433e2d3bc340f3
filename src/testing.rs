//! In-memory element doubles for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

use crate::element::{PageDocument, PageElement, Rect};
use crate::ripple::RippleHost;

/// A detached element recording every mutation.
#[derive(Debug, Default)]
pub struct MockElement {
    styles: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    text: RefCell<String>,
    data: RefCell<BTreeMap<String, String>>,
    attrs: RefCell<BTreeMap<String, String>>,
    html: RefCell<String>,
    detached: Cell<bool>,
    mutations: Cell<usize>,
}

impl MockElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let el = Self::new();
        *el.text.borrow_mut() = text.to_string();
        el
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn data(&self, key: &str) -> Option<String> {
        self.data.borrow().get(key).cloned()
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    /// Number of writes since creation
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    fn touch(&self) {
        self.mutations.set(self.mutations.get() + 1);
    }
}

impl PageElement for MockElement {
    fn set_style(&self, property: &str, value: &str) {
        self.touch();
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn add_class(&self, class: &str) {
        self.touch();
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.touch();
        self.classes.borrow_mut().retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        self.touch();
        *self.text.borrow_mut() = text.to_string();
    }

    fn set_data(&self, key: &str, value: &str) {
        self.touch();
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.touch();
        self.attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_html(&self, html: &str) {
        self.touch();
        *self.html.borrow_mut() = html.to_string();
    }

    fn detach(&self) {
        self.touch();
        self.detached.set(true);
    }
}

impl PageElement for Rc<MockElement> {
    fn set_style(&self, property: &str, value: &str) {
        self.as_ref().set_style(property, value)
    }

    fn add_class(&self, class: &str) {
        self.as_ref().add_class(class)
    }

    fn remove_class(&self, class: &str) {
        self.as_ref().remove_class(class)
    }

    fn has_class(&self, class: &str) -> bool {
        self.as_ref().has_class(class)
    }

    fn text(&self) -> String {
        self.as_ref().text()
    }

    fn set_text(&self, text: &str) {
        self.as_ref().set_text(text)
    }

    fn set_data(&self, key: &str, value: &str) {
        self.as_ref().set_data(key, value)
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.as_ref().set_attr(name, value)
    }

    fn set_html(&self, html: &str) {
        self.as_ref().set_html(html)
    }

    fn detach(&self) {
        self.as_ref().detach()
    }
}

/// A document whose body holds a flat list of elements.
///
/// `find` understands single-class selectors (`.name`) only.
#[derive(Debug, Default)]
pub struct MockDocument {
    body: RefCell<Vec<Rc<MockElement>>>,
}

impl MockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an element with `classes` into the body.
    pub fn add_to_body(&self, classes: &[&str]) -> Rc<MockElement> {
        let el = Rc::new(MockElement::new());
        for class in classes {
            el.classes.borrow_mut().push(class.to_string());
        }
        self.body.borrow_mut().push(Rc::clone(&el));
        el
    }

    /// Number of attached body children
    pub fn body_len(&self) -> usize {
        self.body
            .borrow()
            .iter()
            .filter(|el| !el.is_detached())
            .count()
    }
}

impl PageDocument for MockDocument {
    type Element = Rc<MockElement>;
    type Error = Infallible;

    fn find(&self, selector: &str) -> Result<Option<Self::Element>, Self::Error> {
        let Some(class) = selector.strip_prefix('.') else {
            return Ok(None);
        };
        Ok(self
            .body
            .borrow()
            .iter()
            .find(|el| !el.is_detached() && el.has_class(class))
            .cloned())
    }

    fn create(&self, _tag: &str) -> Result<Self::Element, Self::Error> {
        Ok(Rc::new(MockElement::new()))
    }

    fn append_to_body(&self, element: &Self::Element) -> Result<(), Self::Error> {
        self.body.borrow_mut().push(Rc::clone(element));
        Ok(())
    }
}

/// A button holding overlay children.
#[derive(Debug)]
pub struct MockButton {
    bounds: Rect,
    children: RefCell<Vec<Rc<MockElement>>>,
    max_children: Cell<usize>,
}

impl MockButton {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            children: RefCell::new(Vec::new()),
            max_children: Cell::new(0),
        }
    }

    pub fn overlay_count(&self, class: &str) -> usize {
        self.children
            .borrow()
            .iter()
            .filter(|c| c.has_class(class))
            .count()
    }

    /// Highest number of children ever held at once
    pub fn max_overlay_count(&self) -> usize {
        self.max_children.get()
    }
}

impl RippleHost for MockButton {
    type Overlay = Rc<MockElement>;

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn create_overlay(&self) -> Option<Self::Overlay> {
        Some(Rc::new(MockElement::new()))
    }

    fn remove_overlays(&self, class: &str) {
        self.children.borrow_mut().retain(|c| {
            let keep = !c.has_class(class);
            if !keep {
                c.detach();
            }
            keep
        });
    }

    fn append_overlay(&self, overlay: &Self::Overlay) {
        let mut children = self.children.borrow_mut();
        children.push(Rc::clone(overlay));
        self.max_children
            .set(self.max_children.get().max(children.len()));
    }
}
