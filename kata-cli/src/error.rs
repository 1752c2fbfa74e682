//! Errors raised while interpreting command-line input

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("You must specify an argument. Usage: kata factorial <NUMBER>")]
    MissingArgument,

    #[error("The argument you specify must be an integer")]
    NotAnInteger(String),

    #[error("max {max} exceeds the sieve limit {limit} (set KATA_SIEVE_LIMIT or --limit)")]
    SieveLimit { max: i64, limit: i64 },

    #[error("Improper indexes for substring")]
    ImproperIndexes,
}
