//! Style-property descriptors.
//!
//! A descriptor names the style property a parallax effect drives and,
//! optionally, how the value is wrapped:
//!
//! | descriptor | target | function | axis hint |
//! |---|---|---|---|
//! | `opacity` | `opacity` | - | - |
//! | `transform:translateY` | `transform` | `translateY` | - |
//! | `backgroundPositionX` | `backgroundPosition` | - | `X` |
//! | `backgroundPosition` | `backgroundPosition` | - | - |

use crate::PcssError;
use crate::types::Axis;

pub const BACKGROUND_POSITION: &str = "backgroundPosition";

/// The style property that receives the computed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// The background-position family; the axis is applied when formatting.
    BackgroundPosition,
    /// Any other property, by its camelCase name.
    Property(String),
}

impl StyleTarget {
    pub fn as_str(&self) -> &str {
        match self {
            StyleTarget::BackgroundPosition => BACKGROUND_POSITION,
            StyleTarget::Property(name) => name.as_str(),
        }
    }

    pub fn is_background_position(&self) -> bool {
        matches!(self, StyleTarget::BackgroundPosition)
    }
}

/// A parsed style-property descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProperty {
    pub target: StyleTarget,
    /// CSS function the value is wrapped in (`translateY` for `transform:translateY`).
    pub function: Option<String>,
    /// Axis taken from a trailing `X`/`Y` on a background-position descriptor.
    pub axis_hint: Option<Axis>,
}

impl StyleProperty {
    /// Parses a descriptor.
    ///
    /// Anything mentioning `backgroundPosition` collapses to
    /// [`StyleTarget::BackgroundPosition`], taking its axis hint from the last
    /// character. Otherwise the text before the first `:` is the property and
    /// the segment after it, when non-empty, is the function.
    ///
    /// # Errors
    ///
    /// Returns [`PcssError::EmptyStyleProperty`] when there is no property name.
    pub fn parse(descriptor: &str) -> Result<Self, PcssError> {
        if descriptor.contains(BACKGROUND_POSITION) {
            return Ok(Self {
                target: StyleTarget::BackgroundPosition,
                function: None,
                axis_hint: descriptor.chars().last().and_then(Axis::from_letter),
            });
        }

        let mut segments = descriptor.split(':');
        let name = segments.next().unwrap_or_default();
        if name.is_empty() {
            return Err(PcssError::EmptyStyleProperty(descriptor.to_string()));
        }

        Ok(Self {
            target: StyleTarget::Property(name.to_string()),
            function: segments
                .next()
                .filter(|function| !function.is_empty())
                .map(String::from),
            axis_hint: None,
        })
    }
}

/// Converts a camelCase style property name to its CSS spelling.
///
/// ```rust
/// use pcss::types::property::to_kebab_case;
///
/// assert_eq!(to_kebab_case("backgroundPosition"), "background-position");
/// assert_eq!(to_kebab_case("opacity"), "opacity");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
