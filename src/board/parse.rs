//! Parsing boards from text.
//!
//! Configurations come in as comma- or whitespace-separated seed counts in
//! internal order, store first: `"0,0,1,1,3,5,0"`. Surrounding brackets are
//! tolerated so a displayed board can be pasted back in.

use std::str::FromStr;

use thiserror::Error;

use super::state::Board;

/// Error parsing a board configuration from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The input contained no seed counts at all.
    #[error("empty configuration: a board needs at least the store")]
    Empty,

    /// A field was not a non-negative integer.
    #[error("invalid seed count {token:?}")]
    InvalidSeedCount {
        /// The offending field.
        token: String,
        /// Underlying integer parse failure.
        source: std::num::ParseIntError,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches('[').trim_end_matches(']');

        let mut pits = Vec::new();
        for token in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            let seeds = token
                .parse::<u32>()
                .map_err(|source| ParseBoardError::InvalidSeedCount {
                    token: token.to_string(),
                    source,
                })?;
            pits.push(seeds);
        }

        if pits.is_empty() {
            return Err(ParseBoardError::Empty);
        }
        Ok(Board::from_configuration(&pits))
    }
}
