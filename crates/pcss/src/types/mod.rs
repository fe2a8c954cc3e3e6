pub mod axis;
pub mod property;
pub mod value;

pub use axis::Axis;
pub use property::{StyleProperty, StyleTarget, to_kebab_case};
pub use value::{CssValue, ValueShape, format_number};
