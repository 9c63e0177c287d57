use thiserror::Error;

/// A reason for refusing to evaluate an input string. Positions are
/// byte offsets into the input.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Rejection {
    #[error("non-accepted character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("lacking separation between dice throws at position {position}")]
    AmbiguousTermSeparation { position: usize },
}

/// Only digits, spaces, the dice delimiter and the two operators may
/// appear in an expression.
fn is_accepted(c: char) -> bool {
    c.is_ascii_digit() || c == ' ' || c == 'd' || c == '+' || c == '-'
}

/// Check the input for every reason it cannot be evaluated. Returns all
/// rejections found, in input order. Two dice delimiters with only
/// digits (or nothing) between them, as in "3d33d3" or "3dd3", cannot
/// be split into separate throws.
pub fn validate(input: &str) -> Result<(), Vec<Rejection>> {
    let mut rejections = vec![];

    // true while everything since the last 'd' has been a digit
    let mut in_dice = false;

    for (position, c) in input.char_indices() {
        if !is_accepted(c) {
            rejections.push(Rejection::InvalidCharacter {
                character: c,
                position,
            });
        }

        if c == 'd' {
            if in_dice {
                rejections.push(Rejection::AmbiguousTermSeparation { position });
            }
            in_dice = true;
        } else if !c.is_ascii_digit() {
            in_dice = false;
        }
    }

    if rejections.is_empty() {
        Ok(())
    } else {
        Err(rejections)
    }
}

/// Whether the input passes validation.
pub fn accepts(input: &str) -> bool {
    validate(input).is_ok()
}
