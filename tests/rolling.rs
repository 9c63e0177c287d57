use dice_roll::cli::{self, Invocation, EXIT_INVALID_INPUT};
use dice_roll::dice::parser::tokenize;
use dice_roll::logic::roll_expression;
use dice_roll::roll::{evaluate, DieRoller, RngDieRoller, Rolled};
use dice_roll::validation::accepts;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_roller() -> RngDieRoller<StdRng> {
    RngDieRoller::new(StdRng::seed_from_u64(2017))
}

/// Always rolls the highest face.
struct MaxDieRoller;

impl DieRoller for MaxDieRoller {
    fn roll_number(&mut self, sides: u32) -> u32 {
        sides
    }
}

#[test]
fn scenario_mixed_expression() {
    let (constants, dice) = tokenize("3d20 + 5 - 1d4").expect("valid expression");
    assert_eq!(dice, vec!["3d20", "-1d4"]);
    assert_eq!(constants, vec!["5"]);

    let mut roller = seeded_roller();
    for _ in 0..50 {
        let (_, roll) = roll_expression("3d20 + 5 - 1d4", &mut roller).expect("valid expression");
        assert_eq!(roll.constant_total(), 5);

        let dice: Vec<_> = roll.dice().collect();
        assert_eq!(dice.len(), 2);
        assert!(dice[0].rolls().iter().all(|v| (1..=20).contains(v)));
        assert!(dice[1].rolls().iter().all(|v| (1..=4).contains(v)));
        assert_eq!(
            roll.rolled_value(),
            5 + dice[0].total() - dice[1].total()
        );
    }
}

#[test]
fn scenario_constant_only() {
    let (_, roll) = roll_expression("10", &mut seeded_roller()).expect("valid expression");
    assert_eq!(roll.constant_total(), 10);
    assert_eq!(roll.dice().count(), 0);
    assert_eq!(roll.rolled_value(), 10);
}

#[test]
fn scenario_zero_dice() {
    let (_, roll) = roll_expression("0d6", &mut seeded_roller()).expect("valid expression");
    assert_eq!(roll.rolled_value(), 0);
    assert_eq!(evaluate(&mut seeded_roller(), 5, 0), 0);
}

#[test]
fn maximum_rolls() {
    let (_, roll) = roll_expression("2d6 + 3 - 1d4 4d10", &mut MaxDieRoller).expect("valid expression");
    assert_eq!(roll.rolled_value(), 12 + 3 - 4 + 40);
}

#[test]
fn ambiguous_and_invalid_input_is_rejected() {
    assert!(!accepts("3d33d3"));
    assert!(!accepts("3dd3"));
    assert!(!accepts("3d3x"));
    assert!(accepts("3d3 3d3"));
    assert!(accepts("3d3+3d3"));
}

#[test]
fn cli_exit_statuses() {
    let mut out: Vec<u8> = vec![];
    let status = cli::run(
        &Invocation::from_args(vec!["3d33d3"]),
        &mut seeded_roller(),
        &mut out,
    );
    assert_eq!(status, EXIT_INVALID_INPUT);
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.starts_with("Unacceptable argument 3d33d3:\n"));
    assert!(text.ends_with("Use the -h flag for help\n"));

    let mut out: Vec<u8> = vec![];
    let status = cli::run(
        &Invocation::from_args(vec!["-h"]),
        &mut seeded_roller(),
        &mut out,
    );
    assert_eq!(status, 0);

    let mut out: Vec<u8> = vec![];
    let status = cli::run(
        &Invocation::from_args(vec!["2d6", "-1"]),
        &mut seeded_roller(),
        &mut out,
    );
    assert_eq!(status, 0);
    let text = String::from_utf8(out).expect("utf-8 output");
    assert!(text.starts_with("Rolling: 2d6 - 1\nThrows:\n\t2d6\t-> "));
    assert!(text.contains("\nConst:\t-1\nSum:\t"));
}
