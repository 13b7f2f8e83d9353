//! Price-list parsing helpers used by the demo driver.

use std::io::BufRead;

use crate::error::FeedError;

/// Trait providing file parsing for price sequences.
pub trait PriceParser: Sized {
    /// Parses prices from a buffered reader.
    ///
    /// Each non-empty line is parsed as a single `f64` value using `FromStr`.
    /// Returns an error if any line cannot be parsed.
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FeedError>;
}

impl PriceParser for f64 {
    fn parse_from_file<R: BufRead>(reader: R) -> Result<Vec<Self>, FeedError> {
        let mut prices = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(FeedError::Io)?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }

            match trimmed_line.parse::<Self>() {
                Ok(price) => prices.push(price),
                Err(e) => return Err(FeedError::ParsePricesFile(e.to_string())),
            }
        }
        Ok(prices)
    }
}
