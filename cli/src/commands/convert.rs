use castr_common::locale::Locale;
use castr_core::registry::ConversionRegistry;
use castr_core::value::Value;

use crate::commands::TargetKind;
use crate::terminal::print;

/// Runs one registry dispatch: the command-line value enters as text
/// and comes back as whatever `to` names.
pub fn convert(value: String, to: TargetKind, locale: Locale) -> anyhow::Result<()> {
    let registry = ConversionRegistry::with_defaults(locale);
    let source = Value::Text(value);

    let result: Value = registry.convert(&source, to.kind())?;

    print::outcome("from", format!("{} ({})", source, source.kind()));
    print::outcome("to", format!("{} ({})", result, result.kind()));
    Ok(())
}
