use crate::dice::parser::DiceParsingError;
use crate::validation::Rejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollError {
    /// The input contains characters or term layouts that can never be
    /// evaluated. Every reason found is kept.
    #[error("unacceptable argument {input:?}")]
    Rejected {
        input: String,
        reasons: Vec<Rejection>,
    },

    #[error("unacceptable argument {input:?}: {source}")]
    DiceParsingError {
        input: String,
        #[source]
        source: DiceParsingError,
    },

    #[error("unacceptable argument {input:?}: {source}")]
    DiceRollingError {
        input: String,
        #[source]
        source: DiceRollingError,
    },

    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DiceRollingError {
    #[error("dice expression too large, its total may not fit in a 64-bit integer")]
    ExpressionTooLarge,
}

impl RollError {
    /// One human readable line per problem with the input. Empty for
    /// errors that are not the user's fault.
    pub fn reasons(&self) -> Vec<String> {
        match self {
            RollError::Rejected { reasons, .. } => reasons.iter().map(|r| r.to_string()).collect(),
            RollError::DiceParsingError { source, .. } => vec![source.to_string()],
            RollError::DiceRollingError { source, .. } => vec![source.to_string()],
            RollError::IoError(_) => vec![],
        }
    }

    /// The expression that could not be evaluated, if that is what
    /// went wrong.
    pub fn input(&self) -> Option<&str> {
        match self {
            RollError::Rejected { input, .. }
            | RollError::DiceParsingError { input, .. }
            | RollError::DiceRollingError { input, .. } => Some(input.as_str()),
            RollError::IoError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_reasons_test() {
        let err = RollError::Rejected {
            input: "3dd3x".to_owned(),
            reasons: vec![
                Rejection::AmbiguousTermSeparation { position: 2 },
                Rejection::InvalidCharacter {
                    character: 'x',
                    position: 4,
                },
            ],
        };

        assert_eq!(err.to_string(), "unacceptable argument \"3dd3x\"");
        assert_eq!(err.input(), Some("3dd3x"));
        assert_eq!(
            err.reasons(),
            vec![
                "lacking separation between dice throws at position 2",
                "non-accepted character 'x' at position 4"
            ]
        );
    }

    #[test]
    fn rolling_error_reasons_test() {
        let err = RollError::DiceRollingError {
            input: "9223372036854775807 + 1".to_owned(),
            source: DiceRollingError::ExpressionTooLarge,
        };

        assert_eq!(err.input(), Some("9223372036854775807 + 1"));
        assert_eq!(
            err.reasons(),
            vec!["dice expression too large, its total may not fit in a 64-bit integer"]
        );
    }

    #[test]
    fn parsing_error_reasons_test() {
        let err = RollError::DiceParsingError {
            input: "5 +".to_owned(),
            source: DiceParsingError::ExpectedTerm { position: 3 },
        };

        assert_eq!(
            err.reasons(),
            vec!["expected a constant or dice throw at position 3"]
        );
    }
}
