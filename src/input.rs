// ⌨️ Input Validation
// Turns one line of user text into a number, a quit request, or a rejection

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern is valid"));

/// Digits in i64::MAX
pub const MAX_DIGITS: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter a positive or negative integer only, please try again...")]
    Malformed,

    #[error("Please enter a number between -9,223,372,036,854,775,808 and 9,223,372,036,854,775,807")]
    OutOfRange,
}

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    /// Blank line: stop asking
    Quit,
    Number(i64),
    Rejected(InputError),
}

/// Classify one line. Surrounding whitespace and thousands separators
/// are ignored; only an optional "-" followed by digits is accepted.
pub fn parse_line(line: &str) -> LineInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return LineInput::Quit;
    }

    match parse_number(line) {
        Ok(number) => LineInput::Number(number),
        Err(e) => {
            debug!(line, error = %e, "rejected input");
            LineInput::Rejected(e)
        }
    }
}

/// Validate and parse a numeral such as "-1,234,567"
pub fn parse_number(text: &str) -> Result<i64, InputError> {
    let cleaned = text.trim().replace(',', "");

    if !INTEGER_PATTERN.is_match(&cleaned) {
        return Err(InputError::Malformed);
    }

    let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
    if digits.len() > MAX_DIGITS {
        return Err(InputError::OutOfRange);
    }

    // 19 digits can still overflow (e.g. 9999999999999999999)
    cleaned.parse::<i64>().map_err(|_| InputError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::group_thousands;

    #[test]
    fn test_max_digits_matches_i64() {
        assert_eq!(MAX_DIGITS, i64::MAX.to_string().len());
    }

    #[test]
    fn test_blank_line_quits() {
        assert_eq!(parse_line(""), LineInput::Quit);
        assert_eq!(parse_line("\n"), LineInput::Quit);
        assert_eq!(parse_line("\r\n"), LineInput::Quit);
    }

    #[test]
    fn test_whitespace_only_is_malformed() {
        assert_eq!(parse_line("   \n"), LineInput::Rejected(InputError::Malformed));
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_line("42\n"), LineInput::Number(42));
        assert_eq!(parse_line("-42"), LineInput::Number(-42));
        assert_eq!(parse_line("0"), LineInput::Number(0));
        assert_eq!(parse_line("-0"), LineInput::Number(0));
        assert_eq!(parse_line("  007  "), LineInput::Number(7));
    }

    #[test]
    fn test_commas_are_stripped() {
        assert_eq!(parse_line("1,234,567"), LineInput::Number(1_234_567));
        assert_eq!(parse_line("-1,000"), LineInput::Number(-1000));
        assert_eq!(parse_line("1,0,0"), LineInput::Number(100));
    }

    #[test]
    fn test_malformed() {
        for text in ["abc", "12a", "+5", "1.5", "--1", "-", ",", "1 000"] {
            assert_eq!(
                parse_line(text),
                LineInput::Rejected(InputError::Malformed),
                "for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_limits_accepted() {
        assert_eq!(parse_number("9,223,372,036,854,775,807"), Ok(i64::MAX));
        assert_eq!(parse_number("-9223372036854775808"), Ok(i64::MIN));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            parse_number("12345678901234567890"),
            Err(InputError::OutOfRange)
        );
        assert_eq!(
            parse_number("9223372036854775808"),
            Err(InputError::OutOfRange)
        );
        assert_eq!(
            parse_number("-9223372036854775809"),
            Err(InputError::OutOfRange)
        );
    }

    #[test]
    fn test_out_of_range_message_names_limits() {
        let message = InputError::OutOfRange.to_string();
        assert!(message.contains(&group_thousands(i64::MIN)));
        assert!(message.contains(&group_thousands(i64::MAX)));
    }
}
