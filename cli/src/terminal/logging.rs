use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Single-line event formatter.
///
/// Info and above render as a colored glyph plus the fields. Debug and
/// trace additionally carry the dimmed event target, since every
/// converter logs the same shape of event and the target is the only
/// way to tell them apart.
pub struct CastrFormatter;

/// Glyph and styling for one level.
fn level_style(level: Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[~]", |s| s.cyan()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[!]", |s| s.yellow().bold()),
        Level::ERROR => ("[x]", |s| s.red().bold()),
    }
}

impl<S, N> FormatEvent<S, N> for CastrFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level: Level = *meta.level();
        let (symbol, color_func) = level_style(level);

        write!(writer, "{} ", color_func(symbol.into()))?;

        if level >= Level::DEBUG {
            write!(writer, "{} ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the subscriber. `RUST_LOG` wins when set; otherwise
/// `--verbose` lifts the floor from info to debug so the per-conversion
/// events show up.
pub fn init_logging(verbose: bool) {
    let fallback: &str = if verbose { "debug" } else { "info" };
    let filter: EnvFilter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CastrFormatter)
        .init();
}
