use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid integer '{value}' at position {position}. Expected a comma-separated list (e.g., '1,2,-3').")]
    InvalidInteger { value: String, position: usize },

    #[error("Empty entry at position {0}. Remove the doubled or trailing comma.")]
    EmptyEntry(usize),
}

/// A comma-separated list of integers given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntList(pub Vec<i64>);

impl FromStr for IntList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_int_list(s).map(IntList)
    }
}

/// Parses `"1, 2,-3"` into `[1, 2, -3]`. A blank string is the empty list.
pub fn parse_int_list(input: &str) -> Result<Vec<i64>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .enumerate()
        .map(|(position, raw)| {
            let entry = raw.trim();
            if entry.is_empty() {
                return Err(ParseError::EmptyEntry(position));
            }
            entry.parse().map_err(|_| ParseError::InvalidInteger {
                value: entry.to_string(),
                position,
            })
        })
        .collect()
}
