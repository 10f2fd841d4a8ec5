//! # Conversion Registry
//!
//! An explicit dispatch table: `(source kind, target kind)` pairs map to
//! boxed [`Converter`]s. The table is built once at initialization and
//! queried by exact tag match; there is no runtime type inspection and
//! no fallback chain. Missing pairs are an error, not a panic.

use std::collections::HashMap;

use castr_common::error::FormatError;
use castr_common::locale::Locale;
use thiserror::Error;
use tracing::debug;

use crate::convert::{Converter, EndpointToText, IntegerToText, TextToEndpoint, TextToInteger};
use crate::format::{NumberParser, NumberPrinter};
use crate::value::{Kind, Value};

/// Failure of a registry dispatch.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No converter is registered for the requested pair.
    #[error("no converter registered for {from} -> {to}")]
    NoConverter { from: Kind, to: Kind },

    /// The converter ran and rejected the input.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The dispatch table. Immutable once built; safe to share across
/// threads behind a plain reference.
pub struct ConversionRegistry {
    table: HashMap<(Kind, Kind), Box<dyn Converter>>,
}

impl ConversionRegistry {
    /// An empty registry. Converters have to be added explicitly.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// The standard set: text ⇄ integer, text ⇄ endpoint, and both
    /// number-formatter directions under `locale`.
    pub fn with_defaults(locale: Locale) -> Self {
        let mut registry = Self::new();
        registry.add(TextToInteger);
        registry.add(IntegerToText);
        registry.add(TextToEndpoint);
        registry.add(EndpointToText);
        registry.add(NumberParser(locale));
        registry.add(NumberPrinter(locale));
        registry
    }

    /// Registers a converter under its (source, target) pair. A later
    /// registration for the same pair replaces the earlier one.
    pub fn add<C: Converter + 'static>(&mut self, converter: C) {
        let key = (converter.source(), converter.target());
        debug!(source = %key.0, target = %key.1, "registering converter");
        self.table.insert(key, Box::new(converter));
    }

    /// Converts `value` to `target` via the registered converter for
    /// `(value.kind(), target)`.
    pub fn convert(&self, value: &Value, target: Kind) -> Result<Value, RegistryError> {
        let source: Kind = value.kind();
        let converter = self
            .table
            .get(&(source, target))
            .ok_or(RegistryError::NoConverter {
                from: source,
                to: target,
            })?;

        Ok(converter.convert(value)?)
    }

    /// True if a converter is registered for the pair.
    pub fn supports(&self, source: Kind, target: Kind) -> bool {
        self.table.contains_key(&(source, target))
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::with_defaults(Locale::default())
    }
}
