use crate::parser::{
    Combinator, ComplexSelector, CompoundSelector, Selector, SelectorPart,
    values::{parse_ident, parse_quoted},
};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_until,
    character::complete::{char, multispace0},
    combinator::map,
    multi::many0,
    sequence::{delimited, preceded},
};

/// Parses a simple selector: type, .class, #id, * or [attribute].
pub fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            Selector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            Selector::Class(s.to_string())
        }),
        map(char('*'), |_| Selector::Universal),
        parse_attribute_selector,
        map(parse_ident, |s| Selector::Type(s.to_string())),
    ))(input)
}

/// Parses a compound selector (e.g., "div.panel#main").
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, first) = parse_simple_selector(input)?;
    let (input, rest) = many0(parse_simple_selector)(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, CompoundSelector::new(selectors)))
}

/// Parses a complex selector with combinators (e.g., "main > .panel").
pub fn parse_complex_selector(input: &str) -> IResult<&str, ComplexSelector> {
    let (mut input, mut current_compound) = parse_compound_selector(input)?;
    let mut parts = Vec::new();

    loop {
        let (rem, ws) = multispace0(input)?;

        let combinator_match: IResult<&str, Combinator> = alt((
            map(char('>'), |_| Combinator::Child),
            map(char('+'), |_| Combinator::AdjacentSibling),
            map(char('~'), |_| Combinator::GeneralSibling),
        ))(rem);

        if let Ok((after_op, found_combinator)) = combinator_match {
            let (after_ws, _) = multispace0(after_op)?;
            match parse_compound_selector(after_ws) {
                Ok((next_input, next_compound)) => {
                    parts.push(SelectorPart::new(current_compound, found_combinator));
                    current_compound = next_compound;
                    input = next_input;
                    continue;
                }
                // Trailing operator; leave it unconsumed so the caller rejects it
                Err(_) => break,
            }
        }

        if !ws.is_empty() {
            match parse_compound_selector(rem) {
                Ok((next_input, next_compound)) => {
                    parts.push(SelectorPart::new(current_compound, Combinator::Descendant));
                    current_compound = next_compound;
                    input = next_input;
                    continue;
                }
                Err(_) => break,
            }
        }

        break;
    }

    // The last part always has Combinator::None
    parts.push(SelectorPart::new(current_compound, Combinator::None));
    Ok((input, ComplexSelector::new(parts)))
}

fn parse_attribute_selector(input: &str) -> IResult<&str, Selector> {
    let (input, content) = delimited(char('['), take_until("]"), char(']'))(input)?;

    if let Some(idx) = content.find('=') {
        let name = content[..idx].trim();
        let raw_value = content[idx + 1..].trim();
        let value = match parse_quoted(raw_value) {
            Ok(("", unquoted)) => unquoted,
            _ => raw_value,
        };
        Ok((
            input,
            Selector::Attribute(name.to_string(), Some(value.to_string())),
        ))
    } else {
        Ok((input, Selector::Attribute(content.trim().to_string(), None)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_value_quotes_are_stripped() {
        let (_, selector) = parse_simple_selector("[role=\"main\"]").unwrap();
        assert_eq!(
            selector,
            Selector::Attribute("role".to_string(), Some("main".to_string()))
        );
    }

    #[test]
    fn test_attribute_existence() {
        let (_, selector) = parse_simple_selector("[data-scroll]").unwrap();
        assert_eq!(selector, Selector::Attribute("data-scroll".to_string(), None));
    }

    #[test]
    fn test_trailing_combinator_is_left_unconsumed() {
        let (remaining, complex) = parse_complex_selector("div >").unwrap();
        assert_eq!(complex.parts.len(), 1);
        assert_eq!(remaining.trim(), ">");
    }
}
