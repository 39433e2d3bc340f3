//! `HtmlElement` as the effects' element type.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, NodeList};

use super::WebError;
use crate::element::{PageDocument, PageElement, Rect};
use crate::ripple::RippleHost;

impl PageElement for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(err) = self.style().set_property(property, value) {
            log::warn!("failed to set style {}: {:?}", property, err);
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.class_list().add_1(class) {
            log::warn!("failed to add class {}: {:?}", class, err);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.class_list().remove_1(class) {
            log::warn!("failed to remove class {}: {:?}", class, err);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_data(&self, key: &str, value: &str) {
        if let Err(err) = self.dataset().set(key, value) {
            log::warn!("failed to set data-{}: {:?}", key, err);
        }
    }

    fn set_attr(&self, name: &str, value: &str) {
        if let Err(err) = self.set_attribute(name, value) {
            log::warn!("failed to set attribute {}: {:?}", name, err);
        }
    }

    fn set_html(&self, html: &str) {
        self.set_inner_html(html);
    }

    fn detach(&self) {
        self.remove();
    }
}

impl PageDocument for Document {
    type Element = HtmlElement;
    type Error = WebError;

    fn find(&self, selector: &str) -> Result<Option<HtmlElement>, WebError> {
        query_one(self, selector)
    }

    fn create(&self, tag: &str) -> Result<HtmlElement, WebError> {
        self.create_element(tag)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::Js(format!("<{}> is not an HtmlElement", tag)))
    }

    fn append_to_body(&self, element: &HtmlElement) -> Result<(), WebError> {
        self.body()
            .ok_or(WebError::MissingBody)?
            .append_child(element)?;
        Ok(())
    }
}

impl RippleHost for HtmlElement {
    type Overlay = HtmlElement;

    fn bounds(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn create_overlay(&self) -> Option<HtmlElement> {
        self.owner_document()?
            .create_element("span")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn remove_overlays(&self, class: &str) {
        match self.query_selector_all(&format!(".{}", class)) {
            Ok(existing) => {
                for overlay in elements(&existing) {
                    overlay.remove();
                }
            }
            Err(err) => log::warn!("failed to query overlays: {:?}", err),
        }
    }

    fn append_overlay(&self, overlay: &HtmlElement) {
        if let Err(err) = self.append_child(overlay) {
            log::warn!("failed to append overlay: {:?}", err);
        }
    }
}

/// All HTML elements matching `selector`; empty when nothing matches.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    let list = document.query_selector_all(selector)?;
    Ok(elements(&list))
}

/// The first HTML element matching `selector`, if any.
pub fn query_one(
    document: &Document,
    selector: &str,
) -> Result<Option<HtmlElement>, WebError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

fn elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}
