//! # Endpoint Value Type
//!
//! Defines [`IpPort`], an immutable host/port pair.
//!
//! This module handles parsing and rendering the `host:port` text form:
//! * Rendering is total: `"{host}:{port}"`, port in decimal.
//! * Parsing requires exactly one colon. Zero colons, repeated colons
//!   (raw IPv6 literals included), an empty host, or a port outside
//!   0-65535 are all rejected with a [`FormatError`].

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// A network endpoint: host name or address plus a port.
///
/// Plain value semantics: two `IpPort`s are equal iff both fields are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpPort {
    host: String,
    port: u16,
}

impl IpPort {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for IpPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for IpPort {
    type Err = FormatError;

    /// Parses `"host:port"`.
    ///
    /// Supported format: any non-empty host, a single `:`, a decimal
    /// port in 0-65535. The host is taken verbatim; no address lookup
    /// or validation happens here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port_str) = split_once_colon(s)?;

        if host.is_empty() {
            return Err(FormatError::EmptyHost {
                input: s.to_string(),
            });
        }

        let port = parse_port(port_str, s)?;

        Ok(Self::new(host, port))
    }
}

/// Splits at the colon, rejecting inputs with zero or several colons.
fn split_once_colon(s: &str) -> Result<(&str, &str), FormatError> {
    let Some((host, rest)) = s.split_once(':') else {
        return Err(FormatError::MissingPortDelimiter {
            input: s.to_string(),
        });
    };

    if rest.contains(':') {
        return Err(FormatError::AmbiguousPortDelimiter {
            input: s.to_string(),
        });
    }

    Ok((host, rest))
}

fn parse_port(port_str: &str, original_s: &str) -> Result<u16, FormatError> {
    port_str
        .parse::<u16>()
        .map_err(|_| FormatError::InvalidPort {
            input: original_s.to_string(),
            port: port_str.to_string(),
        })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
