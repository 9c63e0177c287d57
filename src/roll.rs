use crate::dice::{DiceThrow, Expression, Term};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::ops::Deref;

/// Source of die results. Each call returns one value in [1, sides].
/// Callers never ask for a zero-sided die.
pub trait DieRoller {
    fn roll_number(&mut self, sides: u32) -> u32;
}

///A version of DieRoller that uses a rand::Rng to roll numbers.
pub struct RngDieRoller<R: Rng>(R);

impl<R: Rng> RngDieRoller<R> {
    pub fn new(rng: R) -> RngDieRoller<R> {
        RngDieRoller(rng)
    }
}

impl RngDieRoller<StdRng> {
    /// A roller seeded once from operating system entropy.
    pub fn from_entropy() -> RngDieRoller<StdRng> {
        RngDieRoller(StdRng::from_entropy())
    }
}

impl<R: Rng> DieRoller for RngDieRoller<R> {
    fn roll_number(&mut self, sides: u32) -> u32 {
        self.0.gen_range(1..=sides)
    }
}

pub trait Roll {
    type Output;

    fn roll<R: DieRoller>(&self, roller: &mut R) -> Self::Output;
}

pub trait Rolled {
    fn rolled_value(&self) -> i64;
}

/// Roll `count` dice of `sides` sides, returning every result in roll
/// order. Nothing is rolled when either number is zero.
fn roll_dice<R: DieRoller>(roller: &mut R, count: u32, sides: u32) -> Vec<u32> {
    if count == 0 || sides == 0 {
        return vec![];
    }

    (0..count).map(|_| roller.roll_number(sides)).collect()
}

/// Sum of `count` independent dice of `sides` sides. Zero dice, or
/// zero-sided dice, add up to 0.
pub fn evaluate<R: DieRoller>(roller: &mut R, count: u32, sides: u32) -> i64 {
    roll_dice(roller, count, sides)
        .into_iter()
        .map(i64::from)
        .sum()
}

/// The outcome of one dice throw: the throw itself plus each die in
/// the order it was rolled.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DiceRoll {
    throw: DiceThrow,
    rolls: Vec<u32>,
}

impl DiceRoll {
    pub fn new(throw: DiceThrow, rolls: Vec<u32>) -> DiceRoll {
        DiceRoll { throw, rolls }
    }

    pub fn throw(&self) -> &DiceThrow {
        &self.throw
    }

    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    /// Unsigned sum of the dice.
    pub fn total(&self) -> i64 {
        self.rolls.iter().copied().map(i64::from).sum()
    }
}

impl Rolled for DiceRoll {
    fn rolled_value(&self) -> i64 {
        if self.throw.is_negative() {
            -self.total()
        } else {
            self.total()
        }
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rolled_value())?;
        if !self.rolls.is_empty() {
            write!(f, " ({})", self.rolls.iter().join(" + "))?;
        }
        Ok(())
    }
}

impl Roll for DiceThrow {
    type Output = DiceRoll;

    fn roll<R: DieRoller>(&self, roller: &mut R) -> DiceRoll {
        DiceRoll::new(*self, roll_dice(roller, self.count, self.sides))
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TermRoll {
    Constant(i64),
    Dice(DiceRoll),
}

impl Rolled for TermRoll {
    fn rolled_value(&self) -> i64 {
        match self {
            TermRoll::Constant(value) => *value,
            TermRoll::Dice(roll) => roll.rolled_value(),
        }
    }
}

impl Roll for Term {
    type Output = TermRoll;

    fn roll<R: DieRoller>(&self, roller: &mut R) -> TermRoll {
        match self {
            Term::Constant(value) => TermRoll::Constant(*value),
            Term::DiceThrow(throw) => TermRoll::Dice(throw.roll(roller)),
        }
    }
}

impl fmt::Display for TermRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermRoll::Constant(value) => write!(f, "{}", value),
            TermRoll::Dice(roll) => write!(f, "{}", roll),
        }
    }
}

/// One rolled result per term of an expression, in input order.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ExpressionRoll(Vec<TermRoll>);

impl ExpressionRoll {
    /// Rolled dice throws, in input order.
    pub fn dice(&self) -> impl Iterator<Item = &DiceRoll> {
        self.iter().filter_map(|term| match term {
            TermRoll::Dice(roll) => Some(roll),
            TermRoll::Constant(_) => None,
        })
    }

    /// Sum of the constant terms.
    pub fn constant_total(&self) -> i64 {
        self.iter()
            .filter_map(|term| match term {
                TermRoll::Constant(value) => Some(*value),
                TermRoll::Dice(_) => None,
            })
            .sum()
    }

    /// Signed sum of all dice throws.
    pub fn dice_total(&self) -> i64 {
        self.dice().map(Rolled::rolled_value).sum()
    }
}

impl Deref for ExpressionRoll {
    type Target = Vec<TermRoll>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Rolled for ExpressionRoll {
    fn rolled_value(&self) -> i64 {
        self.constant_total() + self.dice_total()
    }
}

impl Roll for Expression {
    type Output = ExpressionRoll;

    fn roll<R: DieRoller>(&self, roller: &mut R) -> ExpressionRoll {
        ExpressionRoll(self.iter().map(|term| term.roll(roller)).collect())
    }
}
