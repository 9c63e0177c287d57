pub mod cli;
pub mod dice;
pub mod error;
pub mod help;
pub mod logic;
pub mod report;
pub mod roll;
pub mod validation;
