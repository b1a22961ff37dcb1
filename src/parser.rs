//! Raw input parsing for the presentation layer.
//!
//! The builders never see raw text; this is the only place where
//! user-supplied strings are turned into value sequences.

use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

/// Parses a comma-separated token string into an ordered value sequence.
///
/// Non-numeric tokens are dropped (logged at debug level). If nothing
/// numeric survives the filter, the input is rejected as `InvalidInput`.
#[instrument(level = "debug")]
pub fn parse_values(raw: &str) -> TreeResult<Vec<i64>> {
    let mut values = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => debug!(token, "dropping non-numeric token"),
        }
    }

    if values.is_empty() {
        return Err(TreeError::InvalidInput(
            "expected comma-separated numbers".to_string(),
        ));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("50, 30, 70, 20, 40, 60, 80", vec![50, 30, 70, 20, 40, 60, 80])]
    #[case("1,2,3", vec![1, 2, 3])]
    #[case("  7 ", vec![7])]
    #[case("-5, 0, 5", vec![-5, 0, 5])]
    #[case("10, abc, 20", vec![10, 20])]
    #[case("x, 3, , y, 4", vec![3, 4])]
    fn given_token_string_when_parsing_then_returns_numeric_values(
        #[case] raw: &str,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(parse_values(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("a, b, c")]
    #[case(",,,")]
    fn given_non_numeric_input_when_parsing_then_returns_invalid_input(#[case] raw: &str) {
        assert!(matches!(
            parse_values(raw),
            Err(TreeError::InvalidInput(_))
        ));
    }
}
