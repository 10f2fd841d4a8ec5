use castr_common::locale::Locale;
use castr_core::format;

use crate::terminal::print;

pub fn format(value: f64, locale: Locale) -> anyhow::Result<()> {
    let rendered: String = format::format_number(value, locale);

    print::outcome("locale", locale);
    print::outcome("formatted", rendered);
    Ok(())
}

pub fn parse(value: &str, locale: Locale) -> anyhow::Result<()> {
    let parsed: f64 = format::parse_number(value, locale)?;

    print::outcome("locale", locale);
    print::outcome("parsed", parsed);
    Ok(())
}
