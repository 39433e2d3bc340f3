//! # page-fx
//!
//! Viewport-triggered reveal, counter and interaction effects for static
//! web pages.
//!
//! This crate provides platform-agnostic logic for:
//! - Firing one-shot effects when elements first enter the viewport
//! - Animating numeric counters frame by frame, preserving their suffix
//! - Back-to-top, hover lift, parallax, loader and ripple effects
//! - Wiring all of the above to a live page (with optional web support)
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for the settings types
//! - `toml` - Load an [`EnhanceConfig`] from TOML
//! - `web` - Enable browser wiring via `wasm-bindgen`/`web-sys`
//!
//! ## Example
//!
//! ```rust
//! use page_fx::{CounterRun, IntersectionEntry, ViewportTrigger, parse_counter_text};
//!
//! // Register the counters found on the page
//! let mut trigger = ViewportTrigger::new(0.5).unwrap();
//! trigger.observe("visitors");
//!
//! // The host reports an intersection batch
//! let fired = trigger.handle_entries(vec![IntersectionEntry::new("visitors", true, 0.6)]);
//! assert_eq!(fired, vec!["visitors"]);
//!
//! // Animate the counter's text over rendering frames
//! let parsed = parse_counter_text("1234+").unwrap();
//! let mut run = CounterRun::new(parsed.value, parsed.suffix, 1500.0);
//! let mut last = String::new();
//! let mut ts = 0.0;
//! while let Some(text) = run.frame_text(ts) {
//!     last = text;
//!     ts += 16.0;
//! }
//! assert_eq!(last, "1234+");
//! ```

mod animation;
mod back_to_top;
mod config;
mod counter;
mod element;
mod interaction;
mod reveal;
mod ripple;
mod trigger;

#[cfg(test)]
mod testing;

#[cfg(feature = "web")]
pub mod web;

pub use animation::{RunState, ValueAnimator};
pub use back_to_top::BackToTop;
pub use config::{ConfigError, EnhanceConfig};
pub use counter::{parse_counter_text, CounterEffect, CounterParseError, CounterRun, CounterText};
pub use element::{PageDocument, PageElement, Point, Rect};
pub use interaction::{HoverLift, LoaderStep, PageLoader, Parallax, SmoothScroll};
pub use reveal::{Reveal, RevealMode};
pub use ripple::{RippleEffect, RippleGeometry, RippleHost};
pub use trigger::{IntersectionEntry, ViewportTrigger, Visibility};

#[cfg(feature = "web")]
pub use web::{enhance_page, PageEffects, WebError};
