//! Non-fatal conditions reported while resolving configuration.
//!
//! None of these stop resolution. Each is logged at `warn` and collected on
//! the [`Resolution`](crate::resolver::Resolution) so hosts and tests can
//! inspect them.

use bitflags::bitflags;
use thiserror::Error;

use pcss::PcssError;

use crate::config::ConfigKey;

bitflags! {
    /// Set of deprecated fields in use.
    ///
    /// Flag order matches [`ConfigKey::DEPRECATED`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DeprecatedFields: u16 {
        const PARALLAX_CSS      = 1 << 0;
        const PARALLAX_AXIS     = 1 << 1;
        const PARALLAX_RATIO    = 1 << 2;
        const PARALLAX_INIT_VAL = 1 << 3;
        const PARALLAX_IF       = 1 << 4;
        const SCROLLER_ID       = 1 << 5;
        const CB                = 1 << 6;
        const CB_CONTEXT        = 1 << 7;
        const CB_ARGS           = 1 << 8;
    }
}

impl DeprecatedFields {
    /// Configuration names of the fields in the set, in declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        ConfigKey::DEPRECATED
            .iter()
            .filter(|key| key.deprecated_flag().is_some_and(|flag| self.contains(flag)))
            .map(ConfigKey::name)
            .collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error(
        "Warning!  Using deprecated field{} ({}).  Please consult the documentation for alternatives.",
        plural(.0),
        join(.0)
    )]
    DeprecatedFields(Vec<&'static str>),

    #[error(
        "The selector provided for the scrolling element ('{0}') was not found in the document.  Tracking the window instead."
    )]
    SelectorNotFound(String),

    #[error(
        "The selector provided for the scrolling element ('{selector}') is not a valid selector.  Tracking the window instead."
    )]
    InvalidSelector {
        selector: String,
        #[source]
        error: PcssError,
    },

    #[error(
        "The ID provided for the scrolling element ('{0}') was not found in the document.  Tracking the window instead."
    )]
    ElementIdNotFound(String),

    #[error("Ignoring configuration value for '{key}': expected {expected}, found {found}.")]
    InvalidValue {
        key: ConfigKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}.  Using 'backgroundPositionY' instead.")]
    InvalidStyleProperty(PcssError),
}

fn plural(fields: &[&str]) -> &'static str {
    if fields.len() > 1 { "s" } else { "" }
}

fn join(fields: &[&str]) -> String {
    fields.join(", ")
}
