use crate::dice::Expression;
use crate::roll::{ExpressionRoll, Rolled};
use std::fmt;

/// Plain text report of a rolled expression: the expression as it was
/// understood, each dice throw with its result, the constant subtotal
/// and the grand total.
pub struct Report<'a> {
    expression: &'a Expression,
    roll: &'a ExpressionRoll,
}

impl<'a> Report<'a> {
    pub fn new(expression: &'a Expression, roll: &'a ExpressionRoll) -> Report<'a> {
        Report { expression, roll }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rolling: {}", self.expression)?;

        let mut dice = self.roll.dice().peekable();
        if dice.peek().is_some() {
            writeln!(f, "Throws:")?;
            for roll in dice {
                writeln!(f, "\t{}\t-> {}", roll.throw(), roll)?;
            }
        }

        writeln!(f, "Const:\t{}", self.roll.constant_total())?;
        writeln!(f, "Sum:\t{}", self.roll.rolled_value())
    }
}
