pub mod parser;

use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

/// A basic dice throw, in XdY notation, like "1d4" or "3d6". A
/// negative throw is subtracted from the total instead of added.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DiceThrow {
    pub(crate) count: u32,
    pub(crate) sides: u32,
    pub(crate) negative: bool,
}

impl DiceThrow {
    pub fn new(count: u32, sides: u32, negative: bool) -> DiceThrow {
        DiceThrow {
            count,
            sides,
            negative,
        }
    }

    /// How many dice are thrown.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// How many sides each die has. Dice produce values in [1, sides].
    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }
}

impl fmt::Display for DiceThrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// One term of a dice expression: either a signed constant, or a dice
/// throw carrying its own sign.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Term {
    Constant(i64),
    DiceThrow(DiceThrow),
}

impl Term {
    pub fn is_negative(&self) -> bool {
        match self {
            Term::Constant(value) => *value < 0,
            Term::DiceThrow(throw) => throw.negative,
        }
    }

    /// The term without its sign, for display after an operator.
    fn magnitude(&self) -> Term {
        match *self {
            Term::Constant(value) => Term::Constant(value.abs()),
            Term::DiceThrow(throw) => Term::DiceThrow(DiceThrow {
                negative: false,
                ..throw
            }),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(value) => write!(f, "{}", value),
            Term::DiceThrow(throw) => write!(f, "{}", throw),
        }
    }
}

/// An ordered series of terms, added up left to right.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Expression(pub Vec<Term>);

impl Expression {
    /// Text form of every constant term, in order. Positive values
    /// carry no sign.
    pub fn constant_strings(&self) -> Vec<String> {
        self.iter()
            .filter(|term| matches!(term, Term::Constant(_)))
            .map(Term::to_string)
            .collect()
    }

    /// Text form of every dice term, in order, e.g. "3d20" or "-1d4".
    pub fn dice_strings(&self) -> Vec<String> {
        self.iter()
            .filter(|term| matches!(term, Term::DiceThrow(_)))
            .map(Term::to_string)
            .collect()
    }

    /// The largest absolute total a roll of this expression can reach,
    /// or None if that does not fit in an i64. Any subtotal of the roll
    /// is bounded by the same value.
    pub fn max_total(&self) -> Option<i64> {
        let bound: i128 = self
            .iter()
            .map(|term| match term {
                Term::Constant(value) => i128::from(*value).abs(),
                Term::DiceThrow(throw) => i128::from(throw.count) * i128::from(throw.sides),
            })
            .sum();
        i64::try_from(bound).ok()
    }
}

impl Deref for Expression {
    type Target = Vec<Term>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for term in iter {
                if term.is_negative() {
                    write!(f, " - {}", term.magnitude())?;
                } else {
                    write!(f, " + {}", term)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_throw_display_test() {
        assert_eq!(DiceThrow::new(3, 20, false).to_string(), "3d20");
        assert_eq!(DiceThrow::new(1, 4, true).to_string(), "-1d4");
        assert_eq!(DiceThrow::new(0, 6, false).to_string(), "0d6");
    }

    #[test]
    fn term_display_test() {
        assert_eq!(Term::Constant(5).to_string(), "5");
        assert_eq!(Term::Constant(-6).to_string(), "-6");
        assert_eq!(
            Term::DiceThrow(DiceThrow::new(2, 8, true)).to_string(),
            "-2d8"
        );
    }

    #[test]
    fn expression_display_test() {
        let expression = Expression(vec![
            Term::DiceThrow(DiceThrow::new(3, 20, false)),
            Term::Constant(5),
            Term::DiceThrow(DiceThrow::new(1, 4, true)),
            Term::Constant(-6),
        ]);
        assert_eq!(expression.to_string(), "3d20 + 5 - 1d4 - 6");

        let leading_negative = Expression(vec![
            Term::DiceThrow(DiceThrow::new(2, 6, true)),
            Term::Constant(1),
        ]);
        assert_eq!(leading_negative.to_string(), "-2d6 + 1");

        assert_eq!(Expression(vec![]).to_string(), "");
    }

    #[test]
    fn max_total_test() {
        let expression = Expression(vec![
            Term::DiceThrow(DiceThrow::new(3, 20, false)),
            Term::Constant(5),
            Term::DiceThrow(DiceThrow::new(1, 4, true)),
            Term::Constant(-6),
        ]);
        assert_eq!(expression.max_total(), Some(60 + 5 + 4 + 6));

        let at_limit = Expression(vec![Term::Constant(i64::MAX)]);
        assert_eq!(at_limit.max_total(), Some(i64::MAX));

        let over = Expression(vec![Term::Constant(i64::MAX), Term::Constant(1)]);
        assert_eq!(over.max_total(), None);

        let cancelling = Expression(vec![Term::Constant(i64::MAX), Term::Constant(-1)]);
        assert_eq!(cancelling.max_total(), None);
    }

    #[test]
    fn expression_term_strings_test() {
        let expression = Expression(vec![
            Term::DiceThrow(DiceThrow::new(3, 20, false)),
            Term::Constant(5),
            Term::DiceThrow(DiceThrow::new(1, 4, true)),
        ]);
        assert_eq!(expression.dice_strings(), vec!["3d20", "-1d4"]);
        assert_eq!(expression.constant_strings(), vec!["5"]);
    }
}
