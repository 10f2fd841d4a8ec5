//! # Locale Conventions
//!
//! A [`Locale`] selects the separator conventions the number formatter
//! works with: which character groups thousands and which one marks the
//! decimal point. Grouping size is three digits for every supported
//! locale.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Supported grouping/decimal conventions, keyed by language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// `1,234.5`
    #[default]
    EnUs,
    /// `1,234.5` (same separators as en-US)
    KoKr,
    /// `1.234,5`
    DeDe,
    /// `1 234,5` (no-break space grouping)
    FrFr,
}

impl Locale {
    /// The separator written between digit groups when formatting.
    pub fn grouping_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::KoKr => ',',
            Locale::DeDe => '.',
            Locale::FrFr => '\u{00A0}',
        }
    }

    /// Separators stripped as grouping when parsing. fr-FR additionally
    /// accepts a plain space, since that is what people actually type.
    pub fn accepted_grouping_separators(self) -> &'static [char] {
        match self {
            Locale::EnUs | Locale::KoKr => &[','],
            Locale::DeDe => &['.'],
            Locale::FrFr => &['\u{00A0}', ' '],
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs | Locale::KoKr => '.',
            Locale::DeDe | Locale::FrFr => ',',
        }
    }

    /// The canonical tag, e.g. `en-US`.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::KoKr => "ko-KR",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = FormatError;

    /// Parses a language tag, case-insensitively, with `-` or `_` as
    /// the subtag separator (e.g. "en-US", "ko_kr", "DE-de").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().replace('_', "-").to_ascii_lowercase();

        match normalized.as_str() {
            "en-us" => Ok(Locale::EnUs),
            "ko-kr" => Ok(Locale::KoKr),
            "de-de" => Ok(Locale::DeDe),
            "fr-fr" => Ok(Locale::FrFr),
            _ => Err(FormatError::UnknownLocale {
                input: s.to_string(),
            }),
        }
    }
}
