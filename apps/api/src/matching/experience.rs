//! Parsing of free-text experience requirements ("2-4 years", "5+ years").

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Inclusive years bracket. `max` is infinite when the text names a single bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceBracket {
    pub min: f64,
    pub max: f64,
}

/// Extracts the first two integers of the text as `[min, max]`.
///
/// Returns `None` when the text contains no digits.
pub fn parse_experience_requirement(text: &str) -> Option<ExperienceBracket> {
    let mut numbers = NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok());

    let min = numbers.next()?;
    let max = numbers.next().unwrap_or(f64::INFINITY);
    Some(ExperienceBracket { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(
            parse_experience_requirement("2-4 years"),
            Some(ExperienceBracket { min: 2.0, max: 4.0 })
        );
    }

    #[test]
    fn test_open_ended() {
        let bracket = parse_experience_requirement("5+ years").unwrap();
        assert_eq!(bracket.min, 5.0);
        assert!(bracket.max.is_infinite());
    }

    #[test]
    fn test_single_number_without_plus_is_open_ended() {
        let bracket = parse_experience_requirement("at least 3 years").unwrap();
        assert_eq!(bracket.min, 3.0);
        assert!(bracket.max.is_infinite());
    }

    #[test]
    fn test_only_first_two_numbers_count() {
        assert_eq!(
            parse_experience_requirement("1 to 3 years, 10 preferred"),
            Some(ExperienceBracket { min: 1.0, max: 3.0 })
        );
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_experience_requirement("senior level"), None);
        assert_eq!(parse_experience_requirement(""), None);
    }
}
