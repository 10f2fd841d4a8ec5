use std::fmt::Display;

use colored::*;

pub const TOTAL_WIDTH: usize = 48;

/// Centered section header, `────⟦ MSG ⟧────` style.
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    println!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.bright_green(),
        "─".repeat(right).bright_black()
    );
}

/// One `> key: value` line.
pub fn outcome<V: Display>(key: &str, value: V) {
    println!(
        "{} {}{} {}",
        ">".bright_black(),
        key.green().bold(),
        ":".bright_black(),
        value
    );
}
