//! Browser wiring for the page effects.
//!
//! Everything here is a thin adapter: DOM queries, event listeners and
//! intersection observers that feed the platform-agnostic effect types.

mod dom;
mod schedule;

use std::rc::Rc;

use js_sys::Array;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

pub use dom::{query_all, query_one};
pub use schedule::{after, animate_counter};

use crate::config::{ConfigError, EnhanceConfig};
use crate::element::{PageElement, Point};
use crate::trigger::{IntersectionEntry, ViewportTrigger};

/// Error type for browser wiring.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("no global window available")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(format!("{:?}", value))
    }
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

type Listener = Closure<dyn FnMut(Event)>;
type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Handle owning every observer and listener installed on a page.
///
/// Dropping the handle disconnects the observers and removes the
/// listeners. Call [`forget`](Self::forget) to keep the effects for the
/// lifetime of the page instead.
pub struct PageEffects {
    observers: Vec<(IntersectionObserver, ObserverCallback)>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl PageEffects {
    /// Install every effect enabled in `config` on the current document.
    ///
    /// Selectors that match nothing are skipped silently. The back-to-top
    /// button is the only node this creates, so it goes in last and an
    /// error earlier on leaves no button behind.
    pub fn install(config: &EnhanceConfig) -> Result<Self, WebError> {
        config.validate()?;
        let window = web_sys::window().ok_or(WebError::MissingWindow)?;
        let document = window.document().ok_or(WebError::MissingDocument)?;
        let mut effects = Self {
            observers: Vec::new(),
            listeners: Vec::new(),
        };

        // Scroll reveal
        let cores = window.navigator().hardware_concurrency();
        let cores = (cores > 0.0).then_some(cores as u32);
        if config.reveal.enabled_for(cores) {
            let targets = query_all(&document, &config.reveal.selector)?;
            for target in &targets {
                config.reveal.prepare(target);
            }
            let reveal = config.reveal.clone();
            effects.observe(config.reveal.threshold, targets, move |el| reveal.show(&el))?;
        } else {
            log::info!("scroll reveal disabled on low-power device");
        }

        // Counters
        let counters = config.counters.clone();
        let win = window.clone();
        effects.observe(
            config.counters.threshold,
            query_all(&document, &config.counters.selector)?,
            move |el| match counters.begin(&el) {
                Ok(Some(run)) => {
                    if let Err(err) = animate_counter(&win, el, run) {
                        log::warn!("counter animation failed to start: {}", err);
                    }
                }
                Ok(None) => {}
                Err(err) => log::warn!("skipping counter: {}", err),
            },
        )?;

        if let Some(hover) = &config.hover {
            let hover = Rc::new(hover.clone());
            for card in query_all(&document, &hover.selector)? {
                let (lift, target) = (Rc::clone(&hover), card.clone());
                effects.listen(&card, "mouseenter", move |_| lift.enter(&target))?;
                let (lift, target) = (Rc::clone(&hover), card.clone());
                effects.listen(&card, "mouseleave", move |_| lift.leave(&target))?;
            }
        }

        if let Some(parallax) = &config.parallax {
            if let Some(hero) = query_one(&document, &parallax.selector)? {
                let parallax = parallax.clone();
                let win = window.clone();
                effects.listen(&window, "scroll", move |_| {
                    parallax.apply(&hero, scroll_y(&win))
                })?;
            }
        }

        if config.smooth_scroll.enabled {
            let smooth = Rc::new(config.smooth_scroll.clone());
            for anchor in query_all(&document, &smooth.selector)? {
                let settings = Rc::clone(&smooth);
                let (doc, link) = (document.clone(), anchor.clone());
                effects.listen(&anchor, "click", move |event| {
                    let Some(href) = link.get_attribute("href") else {
                        return;
                    };
                    let Some(selector) = settings.target(&href) else {
                        return;
                    };
                    event.prevent_default();
                    match doc.query_selector(selector) {
                        Ok(Some(target)) => {
                            let options = ScrollIntoViewOptions::new();
                            options.set_behavior(ScrollBehavior::Smooth);
                            options.set_block(ScrollLogicalPosition::Start);
                            target.scroll_into_view_with_scroll_into_view_options(&options);
                        }
                        Ok(None) => {}
                        Err(err) => log::debug!("unusable anchor {}: {:?}", href, err),
                    }
                })?;
            }
        }

        // Ripples are delegated so buttons added later also ripple
        let ripple = config.ripple.clone();
        let win = window.clone();
        effects.listen(&document, "click", move |event| {
            let Some(button) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            if !button.matches(&ripple.selector).unwrap_or(false) {
                return;
            }
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let click = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            if let Some(overlay) = ripple.spawn(&button, click) {
                if let Err(err) = after(&win, ripple.lifetime_ms, move || overlay.detach()) {
                    log::warn!("ripple removal not scheduled: {}", err);
                }
            }
        })?;

        if let Some(settings) = &config.loader {
            if let Some(loader) = query_one(&document, &settings.selector)? {
                let [(fade_after, fade), (remove_after, remove)] = settings.steps();
                let settings = settings.clone();
                let win = window.clone();
                after(&window, fade_after, move || {
                    settings.apply(&loader, fade);
                    let scheduled = after(&win, remove_after, move || {
                        settings.apply(&loader, remove)
                    });
                    if let Err(err) = scheduled {
                        log::warn!("loader removal not scheduled: {}", err);
                    }
                })?;
            }
        }

        effects.install_back_to_top(&window, &document, config)?;

        log::info!(
            "page effects installed ({} observers, {} listeners)",
            effects.observers.len(),
            effects.listeners.len()
        );
        Ok(effects)
    }

    /// Keep every effect alive until the page unloads.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn install_back_to_top(
        &mut self,
        window: &Window,
        document: &Document,
        config: &EnhanceConfig,
    ) -> Result<(), WebError> {
        let button = config.back_to_top.ensure(document)?;
        let settings = config.back_to_top.clone();
        settings.update(&button, scroll_y(window));

        let (target, win) = (button.clone(), window.clone());
        self.listen(window, "scroll", move |_| settings.update(&target, scroll_y(&win)))?;

        let win = window.clone();
        self.listen(&button, "click", move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })
    }

    /// Observe `targets` and call `on_fire` once per target when it
    /// first intersects the viewport.
    fn observe<F>(
        &mut self,
        threshold: f64,
        targets: Vec<HtmlElement>,
        mut on_fire: F,
    ) -> Result<(), WebError>
    where
        F: FnMut(HtmlElement) + 'static,
    {
        if targets.is_empty() {
            return Ok(());
        }

        let mut trigger = ViewportTrigger::new(threshold)?;
        for target in &targets {
            trigger.observe(target.clone());
        }

        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target().dyn_into::<HtmlElement>().ok()?;
                    Some(IntersectionEntry::new(
                        target,
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ))
                });
            for target in trigger.handle_entries(batch) {
                observer.unobserve(&target);
                on_fire(target);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in &targets {
            observer.observe(target);
        }
        self.observers.push((observer, callback));
        Ok(())
    }

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<(), WebError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Listener::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push((target.clone(), event, callback));
        Ok(())
    }
}

impl Drop for PageEffects {
    fn drop(&mut self) {
        for (observer, _) in &self.observers {
            observer.disconnect();
        }
        for (target, event, callback) in &self.listeners {
            let _ = target
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Install `config` once the DOM is ready and keep it for the page lifetime.
pub fn start(config: EnhanceConfig) -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::MissingWindow)?;
    let document = window.document().ok_or(WebError::MissingDocument)?;

    if document.ready_state() != "loading" {
        PageEffects::install(&config)?.forget();
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move || match PageEffects::install(&config) {
        Ok(effects) => effects.forget(),
        Err(err) => log::error!("page effects failed to install: {}", err),
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

/// JS entry point installing the default effects.
#[wasm_bindgen(js_name = enhancePage)]
pub fn enhance_page() -> Result<(), JsValue> {
    start(EnhanceConfig::default())?;
    Ok(())
}

/// JS entry point installing effects described by a TOML document.
#[cfg(feature = "toml")]
#[wasm_bindgen(js_name = enhancePageWithConfig)]
pub fn enhance_page_with_config(config: &str) -> Result<(), JsValue> {
    let config = EnhanceConfig::from_toml_str(config).map_err(WebError::from)?;
    start(config)?;
    Ok(())
}
