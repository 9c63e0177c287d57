use indoc::indoc;

pub const USAGE: &'static str = indoc! {"
    roll: command line dice rolling

    Usage: roll <dice-expression>
           roll -h | --help

    Input should consist of any number of terms. A term is either a
    constant or a dice throw, and terms are separated by + or -.
    If there is no sign before a term, it is assumed to be positive.

    Dice are written as XdY: throw X dice with Y sides each and add them
    up (use a lowercase d). Constants are any whole number.
    Parentheses, multiplication and keep/drop rolls are not supported.

    Examples:
     roll 1d4
     roll 2d6+8
     roll 3d20 + 5 - 1d4 - 6
"};

/// The hint printed after any rejected input.
pub const HELP_HINT: &'static str = "Use the -h flag for help";

/// Whether an argument asks for the usage text.
pub fn is_help_flag(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}
