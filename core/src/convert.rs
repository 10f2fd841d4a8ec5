//! # Standard Converters
//!
//! The [`Converter`] trait plus the four stock implementations:
//! text ⇄ integer and text ⇄ [`IpPort`]. Each converter handles one
//! (source, target) pair and nothing else; composition happens in the
//! registry.
//!
//! Every implementation logs its input at debug level. Whether anything
//! listens is up to whoever installed the tracing subscriber; the
//! converters themselves stay pure.

use std::str::FromStr;

use castr_common::endpoint::IpPort;
use castr_common::error::FormatError;
use tracing::debug;

use crate::value::{Kind, Value};

/// One-directional value conversion between a fixed pair of kinds.
///
/// Implementations are stateless and shareable across threads; a
/// registry holds them boxed and dispatches by `(source, target)`.
pub trait Converter: Send + Sync {
    fn source(&self) -> Kind;
    fn target(&self) -> Kind;
    fn convert(&self, value: &Value) -> Result<Value, FormatError>;
}

fn mismatch(expected: Kind, actual: &Value) -> FormatError {
    FormatError::KindMismatch {
        expected: expected.name(),
        actual: actual.kind().name(),
    }
}

/// text → integer, base-10.
pub struct TextToInteger;

impl Converter for TextToInteger {
    fn source(&self) -> Kind {
        Kind::Text
    }

    fn target(&self) -> Kind {
        Kind::Integer
    }

    fn convert(&self, value: &Value) -> Result<Value, FormatError> {
        let Value::Text(source) = value else {
            return Err(mismatch(Kind::Text, value));
        };
        debug!(source, "converting text to integer");

        source
            .parse::<i32>()
            .map(Value::Integer)
            .map_err(|_| FormatError::InvalidInteger {
                input: source.clone(),
            })
    }
}

/// integer → text, decimal. Total.
pub struct IntegerToText;

impl Converter for IntegerToText {
    fn source(&self) -> Kind {
        Kind::Integer
    }

    fn target(&self) -> Kind {
        Kind::Text
    }

    fn convert(&self, value: &Value) -> Result<Value, FormatError> {
        let Value::Integer(source) = value else {
            return Err(mismatch(Kind::Integer, value));
        };
        debug!(source, "converting integer to text");

        Ok(Value::Text(source.to_string()))
    }
}

/// endpoint → text, `"{host}:{port}"`. Total.
pub struct EndpointToText;

impl Converter for EndpointToText {
    fn source(&self) -> Kind {
        Kind::Endpoint
    }

    fn target(&self) -> Kind {
        Kind::Text
    }

    fn convert(&self, value: &Value) -> Result<Value, FormatError> {
        let Value::Endpoint(source) = value else {
            return Err(mismatch(Kind::Endpoint, value));
        };
        debug!(source = %source, "converting endpoint to text");

        Ok(Value::Text(source.to_string()))
    }
}

/// text → endpoint, single-colon `"host:port"`.
pub struct TextToEndpoint;

impl Converter for TextToEndpoint {
    fn source(&self) -> Kind {
        Kind::Text
    }

    fn target(&self) -> Kind {
        Kind::Endpoint
    }

    fn convert(&self, value: &Value) -> Result<Value, FormatError> {
        let Value::Text(source) = value else {
            return Err(mismatch(Kind::Text, value));
        };
        debug!(source, "converting text to endpoint");

        IpPort::from_str(source).map(Value::Endpoint)
    }
}
