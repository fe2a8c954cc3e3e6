//! # PCSS - style vocabulary for scroll-driven properties
//!
//! The CSS-side half of the parallax workspace. It knows nothing about
//! scrolling or lifecycles; it only parses and formats the strings that
//! flow in and out of a parallax configuration:
//!
//! - **Selectors**: Parse the CSS selectors used to locate a scroll container
//!   and match them against element metadata
//! - **Style properties**: Interpret descriptors like `backgroundPositionX`
//!   or `transform:translateY`
//! - **Values**: Format computed numbers into CSS values (`0 -70px`, `scale(2)`)
//! - **Declarations**: Parse `key: value;` blocks used as text-based configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use pcss::types::{Axis, StyleProperty, StyleTarget};
//!
//! let property = StyleProperty::parse("backgroundPositionX").unwrap();
//! assert_eq!(property.target, StyleTarget::BackgroundPosition);
//! assert_eq!(property.axis_hint, Some(Axis::X));
//!
//! let property = StyleProperty::parse("transform:translateY").unwrap();
//! assert_eq!(property.target.as_str(), "transform");
//! assert_eq!(property.function.as_deref(), Some("translateY"));
//! ```
//!
//! ## Supported Selectors
//!
//! - Type selectors: `div`, `section`
//! - Class selectors: `.scroller`
//! - ID selectors: `#main`
//! - Attribute selectors: `[data-scroll]`, `[role=main]`
//! - Universal selector: `*`
//! - Descendant and child combinators: `main .panel`, `main > .panel`
//!
//! ## Modules
//!
//! - [`parser`]: Selector and declaration parsing
//! - [`matching`]: Selector matching against element metadata
//! - [`types`]: Axis, style-property descriptors and CSS values
//! - [`error`]: Error types for parsing failures

pub mod error;
pub mod matching;
pub mod parser;
pub mod types;

pub use error::PcssError;
pub use matching::ElementMeta;
pub use types::{Axis, CssValue, StyleProperty, StyleTarget};
