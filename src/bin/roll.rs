use dice_roll::cli::{self, Invocation};
use dice_roll::roll::RngDieRoller;
use std::env;
use std::io;
use std::process;
use tracing_subscriber::filter::EnvFilter;

fn main() {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new("dice_roll=warn,roll=warn")
    };

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let invocation = Invocation::from_args(env::args().skip(1));
    let mut roller = RngDieRoller::from_entropy();
    let stdout = io::stdout();
    let status = cli::run(&invocation, &mut roller, &mut stdout.lock());

    process::exit(status);
}
