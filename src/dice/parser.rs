use nom::bytes::complete::{tag, take_while};
use nom::character::complete::digit1;
use nom::error::ErrorKind;
use nom::{branch::alt, combinator::opt, IResult};
use std::str::FromStr;
use thiserror::Error;

use super::{DiceThrow, Expression, Term};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DiceParsingError {
    #[error("no dice expression given")]
    EmptyExpression,

    #[error("expected a constant or dice throw at position {position}")]
    ExpectedTerm { position: usize },

    #[error("number too large at position {position}")]
    NumberTooLarge { position: usize },

    #[error("too many dice at position {position}, at most {} per throw", MAX_DICE)]
    TooManyDice { position: usize },
}

/// Upper bound on the dice count of a single throw. Every die is kept
/// for the report, so the count decides how much memory a roll takes.
pub const MAX_DICE: u32 = 10_000;

impl DiceParsingError {
    /// Convert a nom failure into a positioned parsing error. The
    /// position is the byte offset into `input` where parsing stopped.
    fn from_nom(input: &str, err: nom::Err<(&str, ErrorKind)>) -> DiceParsingError {
        match err {
            nom::Err::Error((rest, kind)) | nom::Err::Failure((rest, kind)) => {
                let position = input.len() - rest.len();
                match kind {
                    ErrorKind::MapRes => DiceParsingError::NumberTooLarge { position },
                    ErrorKind::TooLarge => DiceParsingError::TooManyDice { position },
                    _ => DiceParsingError::ExpectedTerm { position },
                }
            }
            nom::Err::Incomplete(_) => DiceParsingError::ExpectedTerm {
                position: input.len(),
            },
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Sign {
    Plus,
    Minus,
}

// Only spaces separate terms; other whitespace never gets past validation.
fn is_whitespace(input: char) -> bool {
    input == ' '
}

/// Eat whitespace, returning it
fn eat_whitespace(input: &str) -> IResult<&str, &str> {
    let (input, whitespace) = take_while(is_whitespace)(input)?;
    Ok((input, whitespace))
}

/// Convert an already-matched digit run. Overflow is a hard failure so
/// that alternatives are not tried on the same digits.
fn to_number<'a, T: FromStr>(
    at: &'a str,
    digits: &str,
) -> Result<T, nom::Err<(&'a str, ErrorKind)>> {
    digits
        .parse()
        .map_err(|_| nom::Err::Failure((at, ErrorKind::MapRes)))
}

/// Parse a dice throw like "3d20". Does not eat whitespace.
fn parse_dice(input: &str) -> IResult<&str, (u32, u32)> {
    let count_at = input;
    let (input, count) = digit1(input)?;
    let (input, _) = tag("d")(input)?;
    let sides_at = input;
    let (input, sides) = digit1(input)?;

    let count = to_number(count_at, count)?;
    let sides = to_number(sides_at, sides)?;
    if count > MAX_DICE {
        return Err(nom::Err::Failure((count_at, ErrorKind::TooLarge)));
    }

    Ok((input, (count, sides)))
}

// Parse a constant. Does not eat whitespace.
fn parse_constant(input: &str) -> IResult<&str, i64> {
    let constant_at = input;
    let (input, digits) = digit1(input)?;
    Ok((input, to_number(constant_at, digits)?))
}

// Parse a sign.  Does not eat whitespace.
fn parse_sign(input: &str) -> IResult<&str, Sign> {
    let (input, sign) = alt((tag("+"), tag("-")))(input)?;
    let sign = if sign == "-" { Sign::Minus } else { Sign::Plus };
    Ok((input, sign))
}

/// Parse a term with an optional sign in front of it. Eats leading
/// whitespace. An unsigned term is positive.
fn parse_signed_term(input: &str) -> IResult<&str, Term> {
    let (input, _) = eat_whitespace(input)?;
    let (input, sign) = opt(parse_sign)(input)?;
    let (input, _) = eat_whitespace(input)?;
    let negative = sign == Some(Sign::Minus);

    match parse_dice(input) {
        Ok((input, (count, sides))) => {
            let throw = DiceThrow::new(count, sides, negative);
            return Ok((input, Term::DiceThrow(throw)));
        }
        // not a dice throw, fall back to a constant
        Err(nom::Err::Error(_)) => (),
        Err(e) => return Err(e),
    }

    let (input, value) = parse_constant(input)?;
    let value = if negative { -value } else { value };
    Ok((input, Term::Constant(value)))
}

/// Parse a full dice expression, like "3d20 + 5 - 1d4". Each '+' or
/// '-' starts a new term and its sign belongs to that term; terms
/// separated only by whitespace are positive. The entire input must be
/// consumed.
pub fn parse_expression(input: &str) -> Result<Expression, DiceParsingError> {
    let mut terms = vec![];
    let mut remaining = input;

    while !remaining.trim_start_matches(is_whitespace).is_empty() {
        let (rest, term) =
            parse_signed_term(remaining).map_err(|e| DiceParsingError::from_nom(input, e))?;
        terms.push(term);
        remaining = rest;
    }

    if terms.is_empty() {
        Err(DiceParsingError::EmptyExpression)
    } else {
        Ok(Expression(terms))
    }
}

/// Split an expression into its constant strings and its dice throw
/// strings, each list in input order. Whitespace and leading '+' are
/// dropped, a leading '-' is kept.
pub fn tokenize(input: &str) -> Result<(Vec<String>, Vec<String>), DiceParsingError> {
    let expression = parse_expression(input)?;
    Ok((expression.constant_strings(), expression.dice_strings()))
}
