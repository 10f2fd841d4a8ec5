//! # Conversion Currency
//!
//! [`Value`] is what converters consume and produce: one variant per
//! convertible type. [`Kind`] is the matching tag, used as the registry
//! key so dispatch is an exact-tag lookup instead of runtime type
//! inspection.

use std::fmt;

use castr_common::endpoint::IpPort;

/// Type tag for a [`Value`]. `(Kind, Kind)` pairs key the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Integer,
    Endpoint,
    Number,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Integer => "integer",
            Kind::Endpoint => "endpoint",
            Kind::Number => "number",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed value passing through the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i32),
    Endpoint(IpPort),
    Number(f64),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Integer(_) => Kind::Integer,
            Value::Endpoint(_) => Kind::Endpoint,
            Value::Number(_) => Kind::Number,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Endpoint(endpoint) => write!(f, "{endpoint}"),
            Value::Number(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n)
    }
}

impl From<IpPort> for Value {
    fn from(endpoint: IpPort) -> Self {
        Value::Endpoint(endpoint)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}
