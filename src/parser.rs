use std::str::FromStr;

use crate::converter::ConversionRequest;
use crate::error::ConversionError;

/// The word separating the source unit from the destination unit.
const WORD_SEPARATOR: &str = "to";

/// The fewest words a request can have: `<value> <unit> to <unit>`.
const MIN_WORDS: usize = 4;

/// Parses a request of the form `<value> <unit> to <unit>`.
///
/// The line is lowercased and split on whitespace. The first "to" anchors the
/// grammar: the value is two words before it, the source unit one word before
/// it and the destination unit one word after it. Words elsewhere in the line
/// are ignored.
impl FromStr for ConversionRequest {
    type Err = ConversionError;

    fn from_str(string: &str) -> Result<ConversionRequest, ConversionError> {
        let string = string.to_lowercase();
        let words = string.split_whitespace().collect::<Vec<&str>>();

        let index_separator = words.iter()
        .position(|word| *word == WORD_SEPARATOR)
        .ok_or_else(|| ConversionError::invalid_format("missing \"to\""))?;

        if words.len() < MIN_WORDS {
            return Err(ConversionError::invalid_format("too few words"));
        }

        let index_magnitude = index_separator.checked_sub(2)
        .ok_or_else(|| ConversionError::invalid_format("missing value or unit before \"to\""))?;

        let unit_destination = words.get(index_separator + 1)
        .ok_or_else(|| ConversionError::invalid_format("missing unit after \"to\""))?;

        let magnitude = words[index_magnitude].parse::<f64>().map_err(|_| {
            ConversionError::invalid_format(
                format!("\"{}\" is not a number", words[index_magnitude])
            )
        })?;

        Ok(ConversionRequest {
            unit_source: words[index_separator - 1].to_string(),
            unit_destination: unit_destination.to_string(),
            magnitude,
        })
    }
}
