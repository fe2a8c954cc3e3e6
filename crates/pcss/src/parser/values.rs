use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_until, take_while1},
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
};

/// Parse an identifier (element names, classes, ids, configuration keys).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Parse a floating point or integer number.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(alt((char('-'), char('+')))),
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a single- or double-quoted string. Escapes are not supported.
pub fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_until("\""), char('"')),
        delimited(char('\''), take_until("'"), char('\'')),
    ))(input)
}
