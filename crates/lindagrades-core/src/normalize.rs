//! Locale-aware number handling and column padding.
//!
//! LINDA renders decimals with a comma separator; reports print them the
//! same way.

/// How many fractional digits [`format_decimal`] emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Exactly this many fractional digits.
    Fixed(usize),
    /// The shortest representation that round-trips at single precision.
    ///
    /// Sums like `0.1 + 0.2` print as `0,3` instead of carrying f64 noise.
    Shortest,
}

/// Parse a decimal that may use a comma separator.
pub fn parse_decimal(input: &str) -> Option<f64> {
    input
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Format a value with a comma decimal separator.
pub fn format_decimal(value: f64, precision: Precision) -> String {
    let formatted = match precision {
        Precision::Fixed(digits) => format!("{value:.digits$}"),
        Precision::Shortest => format!("{}", value as f32),
    };
    formatted.replace('.', ",")
}

/// Pad `input` with spaces to `width` characters.
///
/// Input that is already wider is returned unchanged, never truncated.
pub fn justify_left(input: &str, width: usize) -> String {
    let len = input.chars().count();
    if len >= width {
        return input.to_string();
    }
    let mut out = String::with_capacity(input.len() + width - len);
    out.push_str(input);
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comma_and_period() {
        assert_eq!(parse_decimal("2,3"), Some(2.3));
        assert_eq!(parse_decimal("5.0"), Some(5.0));
        assert_eq!(parse_decimal("7"), Some(7.0));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn format_fixed_and_shortest() {
        assert_eq!(format_decimal(2.346, Precision::Fixed(2)), "2,35");
        assert_eq!(format_decimal(5.0, Precision::Fixed(1)), "5,0");
        assert_eq!(format_decimal(5.0, Precision::Shortest), "5");
        assert_eq!(format_decimal(19.5, Precision::Shortest), "19,5");
    }

    #[test]
    fn shortest_drops_double_precision_noise() {
        assert_eq!(format_decimal(3.0 * 1.7, Precision::Shortest), "5,1");
        assert_eq!(format_decimal(0.1 + 0.2, Precision::Shortest), "0,3");
        assert_eq!(format_decimal(3.0 + 0.1 + 0.2, Precision::Shortest), "3,3");
    }

    #[test]
    fn comma_decimals_round_trip() {
        for (input, digits) in [("2,3", 1), ("5,0", 1), ("1,75", 2), ("12,125", 3)] {
            let value = parse_decimal(input).unwrap();
            assert_eq!(format_decimal(value, Precision::Fixed(digits)), input);
        }
        for input in ["2,3", "1,7", "4"] {
            let value = parse_decimal(input).unwrap();
            assert_eq!(format_decimal(value, Precision::Shortest), input);
        }
    }

    #[test]
    fn justify_pads_by_chars() {
        assert_eq!(justify_left("ab", 5), "ab   ");
        assert_eq!(justify_left("Prüfung", 9), "Prüfung  ");
        assert_eq!(justify_left("", 3), "   ");
    }

    #[test]
    fn justify_never_truncates() {
        assert_eq!(justify_left("abcdef", 3), "abcdef");
        assert_eq!(justify_left("abc", 3), "abc");
    }
}
