//! # Locale-Aware Number Formatting
//!
//! Renders `f64` values with the grouping and decimal separators of a
//! [`Locale`], and parses such text back. Parsing is lenient about
//! where grouping separators sit (they are stripped wherever they
//! appear), strict about everything else.

use castr_common::error::FormatError;
use castr_common::locale::Locale;
use tracing::debug;

use crate::convert::Converter;
use crate::value::{Kind, Value};

/// Digits per group. Every supported locale groups by thousands.
const GROUPING_SIZE: usize = 3;

/// Renders `value` under the locale's separator conventions.
///
/// The sign is preserved and the fractional part is carried over
/// ungrouped. Non-finite values and magnitudes that render in exponent
/// form pass through as-is, there is no grouping convention for those.
pub fn format_number(value: f64, locale: Locale) -> String {
    let rendered: String = value.to_string();
    if !value.is_finite() || rendered.contains('e') {
        return rendered;
    }

    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let grouped: String = group_digits(int_part, locale.grouping_separator());

    match frac_part {
        Some(frac) => format!("{sign}{grouped}{}{frac}", locale.decimal_separator()),
        None => format!("{sign}{grouped}"),
    }
}

/// Parses a locale-formatted numeral.
///
/// Grouping separators are stripped, the locale's decimal separator is
/// mapped to `.`, and the remainder goes through the standard float
/// parser. Anything left over that the parser rejects is a
/// [`FormatError`].
pub fn parse_number(source: &str, locale: Locale) -> Result<f64, FormatError> {
    let trimmed: &str = source.trim();
    let mut normalized = String::with_capacity(trimmed.len());

    for ch in trimmed.chars() {
        if locale.accepted_grouping_separators().contains(&ch) {
            continue;
        }
        if ch == locale.decimal_separator() {
            normalized.push('.');
        } else {
            normalized.push(ch);
        }
    }

    normalized
        .parse::<f64>()
        .map_err(|_| FormatError::InvalidNumber {
            input: source.to_string(),
            locale: locale.to_string(),
        })
}

/// Inserts `separator` every [`GROUPING_SIZE`] digits, counted from the
/// right. `digits` must be the bare integer part, no sign, no point.
fn group_digits(digits: &str, separator: char) -> String {
    let len: usize = digits.chars().count();
    let mut grouped = String::with_capacity(len + len / GROUPING_SIZE);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % GROUPING_SIZE == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

/// number → text under a fixed locale.
pub struct NumberPrinter(pub Locale);

impl Converter for NumberPrinter {
    fn source(&self) -> Kind {
        Kind::Number
    }

    fn target(&self) -> Kind {
        Kind::Text
    }

    fn convert(&self, value: &Value) -> Result<Value, FormatError> {
        let Value::Number(source) = value else {
            return Err(FormatError::KindMismatch {
                expected: Kind::Number.name(),
                actual: value.kind().name(),
            });
        };
        debug!(source, locale = %self.0, "formatting number");

        Ok(Value::Text(format_number(*source, self.0)))
    }
}

/// text → number under a fixed locale.
pub struct NumberParser(pub Locale);

impl Converter for NumberParser {
    fn source(&self) -> Kind {
        Kind::Text
    }

    fn target(&self) -> Kind {
        Kind::Number
    }

    fn convert(&self, value: &Value) -> Result<Value, FormatError> {
        let Value::Text(source) = value else {
            return Err(FormatError::KindMismatch {
                expected: Kind::Text.name(),
                actual: value.kind().name(),
            });
        };
        debug!(source, locale = %self.0, "parsing number");

        parse_number(source, self.0).map(Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_us_grouping() {
        assert_eq!(format_number(1000.0, Locale::EnUs), "1,000");
        assert_eq!(format_number(1234567.0, Locale::EnUs), "1,234,567");
        assert_eq!(format_number(999.0, Locale::EnUs), "999");
        assert_eq!(format_number(0.0, Locale::EnUs), "0");
    }

    #[test]
    fn test_fraction_and_sign() {
        assert_eq!(format_number(1234.5, Locale::EnUs), "1,234.5");
        assert_eq!(format_number(-1234.5, Locale::EnUs), "-1,234.5");
        assert_eq!(format_number(-0.25, Locale::EnUs), "-0.25");
    }

    #[test]
    fn test_de_de_swaps_separators() {
        assert_eq!(format_number(1234.5, Locale::DeDe), "1.234,5");
        assert_eq!(parse_number("1.234,5", Locale::DeDe), Ok(1234.5));
    }

    #[test]
    fn test_fr_fr_space_grouping() {
        assert_eq!(format_number(1234.5, Locale::FrFr), "1\u{00A0}234,5");
        // Plain spaces are accepted on the way in.
        assert_eq!(parse_number("1 234,5", Locale::FrFr), Ok(1234.5));
    }

    #[test]
    fn test_parse_strips_grouping() {
        assert_eq!(parse_number("1,000", Locale::EnUs), Ok(1000.0));
        assert_eq!(parse_number("1,000,000.25", Locale::EnUs), Ok(1_000_000.25));
        // Lenient about where the separators sit.
        assert_eq!(parse_number("1,00,0", Locale::EnUs), Ok(1000.0));
        assert_eq!(parse_number("  42 ", Locale::EnUs), Ok(42.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["abc", "", "1.2.3", "--5", "10,a00"] {
            assert!(
                matches!(
                    parse_number(bad, Locale::EnUs),
                    Err(FormatError::InvalidNumber { .. })
                ),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let samples: &[f64] = &[0.0, 1.0, 999.0, 1000.0, 1234.5, -1234.5, 123456789.125];
        for locale in [Locale::EnUs, Locale::KoKr, Locale::DeDe, Locale::FrFr] {
            for &x in samples {
                assert_eq!(
                    parse_number(&format_number(x, locale), locale),
                    Ok(x),
                    "round trip failed for {x} under {locale}"
                );
            }
        }
    }

    #[test]
    fn test_converter_adapters() {
        let printed = NumberPrinter(Locale::EnUs)
            .convert(&Value::Number(1000.0))
            .unwrap();
        assert_eq!(printed, Value::Text("1,000".into()));

        let parsed = NumberParser(Locale::EnUs).convert(&printed).unwrap();
        assert_eq!(parsed, Value::Number(1000.0));
    }
}
