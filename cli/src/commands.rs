pub mod convert;
pub mod number;

use castr_common::locale::Locale;
use castr_core::value::Kind;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "castr")]
#[command(about = "A small type-conversion toolkit.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Show the per-conversion debug events
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a value to a target kind through the registry
    #[command(alias = "c")]
    Convert {
        value: String,
        /// Target kind to convert to
        #[arg(long, value_enum)]
        to: TargetKind,
        /// Locale used by the number formatter
        #[arg(long, default_value = "en-US")]
        locale: Locale,
    },
    /// Render a number with locale grouping separators
    #[command(alias = "f")]
    Format {
        value: f64,
        #[arg(long, default_value = "en-US")]
        locale: Locale,
    },
    /// Parse a locale-formatted numeral
    #[command(alias = "p")]
    Parse {
        value: String,
        #[arg(long, default_value = "en-US")]
        locale: Locale,
    },
}

/// Clap-facing mirror of [`Kind`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetKind {
    Text,
    Integer,
    Endpoint,
    Number,
}

impl TargetKind {
    pub fn kind(self) -> Kind {
        match self {
            TargetKind::Text => Kind::Text,
            TargetKind::Integer => Kind::Integer,
            TargetKind::Endpoint => Kind::Endpoint,
            TargetKind::Number => Kind::Number,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
