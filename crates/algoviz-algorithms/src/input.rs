//! Validation of user-typed datasets.

use std::num::IntErrorKind;

use crate::dataset::DatasetConfig;
use crate::error::{InputError, Result};
use crate::searching::SearchDataset;

/// Parse values separated by commas and/or whitespace.
///
/// Checks run in a fixed order: empty input, too many values, a token that is
/// not an integer, then a value outside `config.input_range`. Nothing is
/// returned unless every value passes.
pub fn parse_values(text: &str, config: &DatasetConfig) -> Result<Vec<u32>> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(InputError::Empty);
    }
    if tokens.len() > config.input_limit {
        return Err(InputError::TooMany {
            count: tokens.len(),
            limit: config.input_limit,
        });
    }

    let numbers = tokens
        .iter()
        .map(|token| parse_integer(token))
        .collect::<Result<Vec<i64>>>()?;

    let (min, max) = (*config.input_range.start(), *config.input_range.end());
    numbers
        .into_iter()
        .map(|value| {
            u32::try_from(value)
                .ok()
                .filter(|v| config.input_range.contains(v))
                .ok_or(InputError::OutOfRange { value, min, max })
        })
        .collect()
}

/// Parse custom input for the searching family. Values are sorted; the target
/// is kept.
pub fn parse_search_values(
    text: &str,
    target: u32,
    config: &DatasetConfig,
) -> Result<SearchDataset> {
    parse_values(text, config).map(|values| SearchDataset::new(values, target))
}

/// Integers too large for `i64` still count as numbers, just out of range.
fn parse_integer(token: &str) -> Result<i64> {
    token.parse::<i64>().or_else(|err| match err.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(InputError::NotANumber(token.to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<u32>> {
        parse_values(text, &DatasetConfig::default())
    }

    #[test]
    fn accepts_mixed_separators() {
        assert_eq!(parse("5, 3 8,1").unwrap(), vec![5, 3, 8, 1]);
        assert_eq!(parse("  42\n").unwrap(), vec![42]);
        assert_eq!(parse("1,,100").unwrap(), vec![1, 100]);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse(""), Err(InputError::Empty));
        assert_eq!(parse(" , ,"), Err(InputError::Empty));
    }

    #[test]
    fn rejects_too_many_before_anything_else() {
        let text = vec!["x"; 21].join(",");
        assert_eq!(parse(&text), Err(InputError::TooMany { count: 21, limit: 20 }));
        assert!(parse(&vec!["7"; 20].join(" ")).is_ok());
    }

    #[test]
    fn rejects_non_numbers_before_range() {
        assert_eq!(parse("200, abc"), Err(InputError::NotANumber("abc".into())));
        assert_eq!(parse("12abc"), Err(InputError::NotANumber("12abc".into())));
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            parse("200, 5, 10"),
            Err(InputError::OutOfRange { value: 200, min: 1, max: 100 })
        );
        assert_eq!(
            parse("0"),
            Err(InputError::OutOfRange { value: 0, min: 1, max: 100 })
        );
        assert_eq!(
            parse("-3"),
            Err(InputError::OutOfRange { value: -3, min: 1, max: 100 })
        );
        assert!(matches!(
            parse("99999999999999999999"),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn search_input_is_sorted() {
        let data = parse_search_values("9 2 5", 5, &DatasetConfig::default()).unwrap();
        assert_eq!(data.values(), &[2, 5, 9]);
        assert_eq!(data.target(), 5);
    }

    #[test]
    fn error_messages() {
        assert_eq!(InputError::Empty.to_string(), "please enter at least one number");
        assert_eq!(
            InputError::TooMany { count: 25, limit: 20 }.to_string(),
            "maximum 20 elements allowed, got 25"
        );
    }
}
