//! # Conversion Errors
//!
//! Every conversion in this workspace fails the same way: the input text
//! could not be turned into the requested target type. `FormatError`
//! carries one variant per rejection reason. There is no recovery path;
//! each failure rejects exactly one input and leaves no state behind.

use thiserror::Error;

/// Rejection of a single malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The input is not a base-10 integer literal (empty, stray
    /// characters, or out of the `i32` range).
    #[error("'{input}' is not a base-10 integer")]
    InvalidInteger { input: String },

    /// An endpoint string without any `:` between host and port.
    #[error("'{input}' is missing the ':' between host and port")]
    MissingPortDelimiter { input: String },

    /// An endpoint string with more than one `:`. Exactly one is
    /// required, so raw IPv6 literals are rejected rather than split at
    /// a guessed position.
    #[error("'{input}' contains more than one ':', expected exactly 'host:port'")]
    AmbiguousPortDelimiter { input: String },

    /// An endpoint string starting with `:` (nothing before the colon).
    #[error("'{input}' has an empty host")]
    EmptyHost { input: String },

    /// The text after the colon is not a port number in 0-65535.
    #[error("'{port}' in '{input}' is not a port number (0-65535)")]
    InvalidPort { input: String, port: String },

    /// A locale tag no formatter convention is defined for.
    #[error("'{input}' is not a supported locale tag")]
    UnknownLocale { input: String },

    /// A numeral that does not parse under the given locale's separator
    /// conventions.
    #[error("'{input}' is not a valid {locale} number")]
    InvalidNumber { input: String, locale: String },

    /// A converter was handed a value of the wrong kind. Only reachable
    /// by invoking a converter directly; registry lookups key on the
    /// source kind and cannot mismatch.
    #[error("expected a {expected} value, got {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}
