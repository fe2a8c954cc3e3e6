//! Declaration-block parsing for text-based configuration.
//!
//! A block is a sequence of `key: value` pairs separated by `;` or newlines:
//!
//! ```text
//! styleProperty: opacity:scale;
//! ratio: 0.5
//! scrollerSelector: "#main"
//! disabled: false;
//! ```
//!
//! Bare values run until the next separator, so `name:function` descriptors
//! need no quoting.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, line_ending, multispace0, space0},
    combinator::{all_consuming, eof, map},
    multi::many0,
    sequence::tuple,
};

use crate::PcssError;
use crate::parser::values::{parse_ident, parse_number, parse_quoted};

/// A declaration value before it is interpreted by a consumer.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

/// A single `name: value` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDeclaration {
    pub name: String,
    pub value: RawValue,
}

/// Parses a whole declaration block.
///
/// # Errors
///
/// Returns [`PcssError::InvalidSyntax`] if any part of the input is not a
/// well-formed declaration.
pub fn parse_declarations(input: &str) -> Result<Vec<RawDeclaration>, PcssError> {
    let (remaining, declarations) =
        many0(parse_declaration)(input).map_err(|e| PcssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(PcssError::InvalidSyntax(format!(
            "Unexpected tokens at end of declarations: {}",
            remaining.trim()
        )));
    }

    Ok(declarations)
}

fn parse_declaration(input: &str) -> IResult<&str, RawDeclaration> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, _) = tuple((space0, char(':'), space0))(input)?;
    let (input, value) = parse_raw_value(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = alt((tag(";"), line_ending, eof))(input)?;

    Ok((
        input,
        RawDeclaration {
            name: name.to_string(),
            value,
        },
    ))
}

fn parse_raw_value(input: &str) -> IResult<&str, RawValue> {
    alt((
        map(parse_quoted, |s| RawValue::Text(s.to_string())),
        map(is_not(";\r\n"), classify_bare),
    ))(input)
}

fn classify_bare(raw: &str) -> RawValue {
    let word = raw.trim();
    match word {
        "null" => RawValue::Null,
        "true" => RawValue::Bool(true),
        "false" => RawValue::Bool(false),
        _ => match all_consuming(parse_number)(word) {
            Ok((_, number)) => RawValue::Number(number),
            Err(_) => RawValue::Text(word.to_string()),
        },
    }
}
