//! Error types for PCSS parsing.
//!
//! This module defines the errors that can occur when parsing selectors,
//! style-property descriptors or declaration blocks.

use thiserror::Error;

/// Errors that can occur during PCSS parsing.
///
/// # Examples
///
/// ```rust
/// use pcss::parser::parse_selector;
/// use pcss::PcssError;
///
/// // A dangling combinator is not a selector
/// let result = parse_selector("div >");
/// assert!(matches!(result, Err(PcssError::InvalidSelector(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PcssError {
    /// The selector string could not be parsed.
    ///
    /// The string is the original selector as provided.
    #[error("Invalid selector: '{0}'")]
    InvalidSelector(String),

    /// A style-property descriptor had no property name (e.g. `":scale"`).
    #[error("Style property is missing a name: '{0}'")]
    EmptyStyleProperty(String),

    /// Invalid declaration syntax was encountered.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("Declaration syntax error: {0}")]
    InvalidSyntax(String),

    /// An axis value other than `X` or `Y`.
    #[error("Invalid axis: '{0}' (expected 'X' or 'Y')")]
    InvalidAxis(String),
}
