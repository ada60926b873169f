use thiserror::Error;

use crate::models::ScoringInput;

/// A flag value the tokenizer could not use. None of these abort the scan;
/// the field keeps its default and the binary logs the rejection.
#[derive(Debug, Error, PartialEq)]
pub enum FlagError {
    #[error("{flag} expects a value")]
    MissingValue { flag: &'static str },

    #[error("invalid integer {value:?} for {flag}, using default")]
    InvalidInt { flag: &'static str, value: String },

    #[error("invalid number {value:?} for {flag}, using default")]
    InvalidFloat { flag: &'static str, value: String },
}

/// Tokenize command-line flags into a `ScoringInput`.
///
/// A recognized flag consumes the next token as its value unconditionally;
/// a flag in final position has no value and is skipped. Unknown flags and
/// stray tokens are ignored. Malformed numeric values fall back to the
/// field default and are reported in the rejection list.
pub fn parse_args<I>(args: I) -> (ScoringInput, Vec<FlagError>)
where
    I: IntoIterator<Item = String>,
{
    let mut input = ScoringInput::default();
    let mut rejected = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--holders" => match iter.next() {
                Some(v) => match v.parse::<i64>() {
                    Ok(n) => input.holders = n,
                    Err(_) => rejected.push(FlagError::InvalidInt {
                        flag: "--holders",
                        value: v,
                    }),
                },
                None => rejected.push(FlagError::MissingValue { flag: "--holders" }),
            },
            "--lp_locked" => match iter.next() {
                Some(v) => input.lp_locked = is_truthy(&v),
                None => rejected.push(FlagError::MissingValue { flag: "--lp_locked" }),
            },
            "--risk" => match iter.next() {
                Some(v) => match v.parse::<f64>() {
                    Ok(r) => input.risk = r,
                    Err(_) => rejected.push(FlagError::InvalidFloat {
                        flag: "--risk",
                        value: v,
                    }),
                },
                None => rejected.push(FlagError::MissingValue { flag: "--risk" }),
            },
            _ => {}
        }
    }

    (input, rejected)
}

/// Truthy set for `--lp_locked`. Anything else, malformed text included,
/// reads as false.
fn is_truthy(v: &str) -> bool {
    matches!(v, "1" | "true" | "yes" | "y")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
