use crate::error::RollError;
use crate::help::{is_help_flag, HELP_HINT, USAGE};
use crate::logic::roll_expression;
use crate::report::Report;
use crate::roll::DieRoller;
use log::error;
use std::io::Write;

/// Exit status for input that could not be evaluated.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Exit status when the output could not be written.
pub const EXIT_IO_ERROR: i32 = 1;

/// What the user asked for on the command line.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Invocation {
    Help,
    Roll(String),
}

impl Invocation {
    /// Interpret the program arguments (without the program name). All
    /// arguments are joined with spaces into one expression, so
    /// `roll 3d20 + 5 - 1d4` and `roll "3d20 + 5 - 1d4"` are the same.
    /// A help flag anywhere wins over everything else.
    pub fn from_args<I, S>(args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parts = vec![];
        for arg in args {
            let arg = arg.as_ref();
            if is_help_flag(arg) {
                return Invocation::Help;
            }
            parts.push(arg.to_owned());
        }

        if parts.is_empty() {
            Invocation::Help
        } else {
            Invocation::Roll(parts.join(" "))
        }
    }
}

/// Carry out the invocation, writing the usage text or the roll report.
pub fn execute<R: DieRoller, W: Write>(
    invocation: &Invocation,
    roller: &mut R,
    out: &mut W,
) -> Result<(), RollError> {
    match invocation {
        Invocation::Help => write!(out, "{}", USAGE)?,
        Invocation::Roll(input) => {
            let (expression, roll) = roll_expression(input, roller)?;
            write!(out, "{}", Report::new(&expression, &roll))?;
        }
    }

    Ok(())
}

/// Explain why the input was refused.
fn write_rejection<W: Write>(out: &mut W, err: &RollError) -> std::io::Result<()> {
    writeln!(out, "Unacceptable argument {}:", err.input().unwrap_or_default())?;
    for reason in err.reasons() {
        writeln!(out, "- {}", reason)?;
    }
    writeln!(out, "{}", HELP_HINT)
}

/// Run the invocation and report failures to `out`, returning the
/// process exit status.
pub fn run<R: DieRoller, W: Write>(invocation: &Invocation, roller: &mut R, out: &mut W) -> i32 {
    match execute(invocation, roller, out) {
        Ok(()) => 0,
        Err(RollError::IoError(e)) => {
            error!("could not write output: {}", e);
            EXIT_IO_ERROR
        }
        Err(e) => match write_rejection(out, &e) {
            Ok(()) => EXIT_INVALID_INPUT,
            Err(io) => {
                error!("could not write output: {}", io);
                EXIT_IO_ERROR
            }
        },
    }
}
