use crate::dice::parser::parse_expression;
use crate::dice::Expression;
use crate::error::{DiceRollingError, RollError};
use crate::roll::{DieRoller, ExpressionRoll, Roll};
use crate::validation::validate;
use log::debug;

/// Validate, parse and roll a dice expression. Nothing is rolled
/// unless the whole input is acceptable and every possible total fits
/// in an i64.
pub fn roll_expression<R: DieRoller>(
    input: &str,
    roller: &mut R,
) -> Result<(Expression, ExpressionRoll), RollError> {
    if let Err(reasons) = validate(input) {
        debug!("rejected {:?}: {:?}", input, reasons);
        return Err(RollError::Rejected {
            input: input.to_owned(),
            reasons,
        });
    }

    let expression = parse_expression(input).map_err(|source| {
        debug!("could not parse {:?}: {}", input, source);
        RollError::DiceParsingError {
            input: input.to_owned(),
            source,
        }
    })?;

    debug!("parsed {:?} as {:?}", input, expression);
    if expression.max_total().is_none() {
        debug!("total of {:?} could overflow", input);
        return Err(RollError::DiceRollingError {
            input: input.to_owned(),
            source: DiceRollingError::ExpressionTooLarge,
        });
    }

    let roll = expression.roll(roller);
    Ok((expression, roll))
}
