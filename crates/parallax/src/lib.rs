//! # Parallax
//!
//! Scroll-driven style effects. An effect maps the scroll offset of a
//! container (or the viewport) onto one style property of a target element:
//!
//! ```text
//! value = clamp(offset * ratio + initialValue)
//! ```
//!
//! and writes it as a CSS value such as `0 -70px`, `translateY(12px)` or `0.4`.
//!
//! ## Pieces
//!
//! - [`config`]: Individually-bound inputs and the aggregate configuration object
//! - [`resolver`]: Folds inputs, deprecated aliases and defaults into a [`CanonicalConfig`]
//! - [`compute`]: Turns a scroll offset into a CSS value and applies it
//! - [`directive`]: The [`Parallax`] lifecycle adapter (attach, reconfigure, scroll, detach)
//! - [`document`]: The [`Document`] trait hosts implement
//! - [`dom`]: An in-memory [`Document`]
//!
//! ## Example
//!
//! ```
//! use parallax::{Dom, Parallax, ParallaxInputs, ScrollSource};
//! use pcss::ElementMeta;
//!
//! let mut dom = Dom::new();
//! let hero = dom.append_child(dom.body(), ElementMeta::new("div"));
//!
//! let inputs = ParallaxInputs::new()
//!     .with_style_property("opacity")
//!     .with_ratio(0.01)
//!     .with_css_unit("");
//! let mut effect = Parallax::new(hero, inputs);
//! effect.attach(&mut dom);
//!
//! let event = dom.scroll_to(ScrollSource::Viewport, 50.0);
//! assert_eq!(effect.on_scroll(&mut dom, &event).as_deref(), Some("0.5"));
//! assert_eq!(dom.style(hero, "opacity"), Some("0.5"));
//!
//! effect.detach(&mut dom);
//! ```

pub mod compute;
pub mod config;
pub mod diagnostic;
pub mod directive;
pub mod document;
pub mod dom;
pub mod error;
mod log_init;
pub mod message;
pub mod resolver;
pub mod testing;

pub use compute::{clamp, compute, evaluate};
pub use config::{ConfigKey, ConfigValue, LegacyCallback, ParallaxConfig, ParallaxInputs};
pub use diagnostic::{DeprecatedFields, Diagnostic};
pub use directive::{Parallax, TrackingState};
pub use document::{Document, ElementId, ListenerId, ScrollEvent, ScrollSource};
pub use dom::Dom;
pub use error::{ParallaxError, Result};
pub use log_init::init_logger;
pub use message::UpdateEvent;
pub use resolver::{CallbackBinding, CanonicalConfig, Resolution, resolve};

// Re-export the log crate so hosts can use parallax::log::LevelFilter, etc.
pub use log;
pub use pcss::types::{Axis, StyleTarget};
