//! Selector and declaration parsing.
//!
//! - [`parse_selector`]: Parse a complete selector list such as `main > .panel, #side`
//! - [`parse_declarations`]: Parse a `key: value;` configuration block
//! - Selector types: [`Selector`], [`CompoundSelector`], [`ComplexSelector`]
//!
//! ## Submodules
//!
//! - [`selectors`]: Selector parsing (type, class, ID, attribute, combinators)
//! - [`ast`]: Selector data structures
//! - [`declarations`]: Declaration-block parsing
//! - [`values`]: Identifier, number and string parsing
//!
//! ## Example
//!
//! ```rust
//! use pcss::parser::{parse_selector, Selector};
//!
//! let list = parse_selector("#scroller").unwrap();
//! assert_eq!(
//!     list.selectors[0].parts[0].compound.selectors[0],
//!     Selector::Id("scroller".to_string())
//! );
//! ```

pub mod ast;
pub mod declarations;
pub mod selectors;
pub mod values;

pub use crate::parser::ast::{
    Combinator, ComplexSelector, CompoundSelector, Selector, SelectorList, SelectorPart,
};
pub use crate::parser::declarations::{RawDeclaration, RawValue, parse_declarations};

use crate::PcssError;
use crate::parser::selectors::parse_complex_selector;

use nom::{
    IResult,
    character::complete::{char, multispace0},
    multi::many0,
    sequence::{preceded, tuple},
};

/// Parses a comma-separated list of selectors (e.g., "main, .scroller").
pub fn parse_selector_list(input: &str) -> IResult<&str, SelectorList> {
    let (input, _) = multispace0(input)?;
    let (input, first) = parse_complex_selector(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_complex_selector,
    ))(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, SelectorList::new(selectors)))
}

/// Parses a selector list that must span the whole input.
///
/// # Errors
///
/// Returns [`PcssError::InvalidSelector`] carrying the original text when the
/// input is empty, malformed, or has trailing tokens.
pub fn parse_selector(source: &str) -> Result<SelectorList, PcssError> {
    match parse_selector_list(source) {
        Ok((remaining, list)) if remaining.trim().is_empty() => Ok(list),
        _ => Err(PcssError::InvalidSelector(source.to_string())),
    }
}
