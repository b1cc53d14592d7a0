//! Utility functions and errors for parsing input.

use std::str::FromStr;

use thiserror::Error;

use crate::DynamicError;

/// A string parsing error with context of the string that was being parsed.
#[derive(Error, Debug)]
#[error("failed to parse string: {string:?}")]
pub struct ParseContextError<E>
where
    E: std::error::Error,
{
    /// The string that was being parsed.
    string: String,
    source: E,
}

/// Parse a string slice into another type.
///
/// This wraps [`str::parse`], keeping the offending string as context on the
/// error.
///
/// # Errors
///
/// Returns a [`ParseContextError`] carrying the given string and
/// [`F::Err`][FromStr::Err] when the string does not parse as the desired
/// type.
pub fn parse_with_context<F>(string: &str) -> Result<F, ParseContextError<F::Err>>
where
    F: FromStr,
    F::Err: std::error::Error,
{
    string.parse::<F>().map_err(|source| ParseContextError {
        string: string.to_string(),
        source,
    })
}

/// A line in an input string caused a parsing error.
#[derive(Error, Debug)]
#[error("failure parsing line {}", .line_index.saturating_add(1))]
pub struct InvalidLine {
    /// The line index, zero based.
    /// This will be formatted to a one-based number for display.
    line_index: usize,
    source: DynamicError,
}

/// Parse each line of `input` with a closure, wrapping any line's error in
/// an [`InvalidLine`] reporting where parsing failed.
///
/// # Arguments
///
/// - `input` - The input string to parse line by line.
/// - `parser` - A closure receiving each zero-based line index and line.
///
/// # Returns
///
/// An iterable of parsing results for each line, commonly collected into a
/// `Result` of a collection.
pub fn parse_input_lines<'input, T, E, F>(
    input: &'input str,
    mut parser: F,
) -> impl Iterator<Item = Result<T, InvalidLine>> + 'input
where
    T: 'input,
    E: Into<DynamicError> + 'input,
    F: FnMut(usize, &str) -> Result<T, E> + 'input,
{
    input.lines().enumerate().map(move |(line_index, line)| {
        parser(line_index, line).map_err(|source| InvalidLine {
            line_index,
            source: source.into(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_error_carries_the_string() {
        let result = parse_with_context::<u32>("12a");
        assert!(result.is_err());
        let message = result.map(|_| ()).map_err(|error| error.to_string());
        assert_eq!(message, Err(String::from("failed to parse string: \"12a\"")));
    }

    #[test]
    fn line_errors_report_one_based_positions() {
        let results: Vec<_> =
            parse_input_lines("1\nx\n3\n", |_, line| parse_with_context::<u32>(line)).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[2].is_ok());
        let message = results[1].as_ref().map_err(ToString::to_string);
        assert_eq!(message.map_err(|m| m.contains("line 2")), Err(true));
    }
}
