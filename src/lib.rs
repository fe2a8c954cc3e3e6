//! Scroll-driven parallax effects.
//!
//! This crate bundles the two workspace crates:
//!
//! - [`pcss`]: selector and declaration parsing, style-property descriptors
//!   and CSS value formatting
//! - [`parallax`]: configuration resolution, value computation and the
//!   effect lifecycle
//!
//! Most hosts only need the [`prelude`].

pub use parallax;
pub use pcss;

pub use parallax::{ParallaxError, Result, init_logger};

pub mod prelude {
    pub use parallax::testing::Harness;
    pub use parallax::{
        Axis, ConfigValue, Diagnostic, Document, Dom, ElementId, LegacyCallback, Parallax,
        ParallaxConfig, ParallaxInputs, ScrollEvent, ScrollSource, UpdateEvent, resolve,
    };
    pub use pcss::ElementMeta;
}
