use crate::models::color::Rgb;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Selectable entries in green, everything else greyed out.
pub fn colorize_selectable(value: &str, selectable: bool) -> String {
    if selectable {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}

/// Closed / invalid markers in red, plain text otherwise.
pub fn colorize_status(value: &str, ok: bool) -> String {
    if ok {
        value.to_string()
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Two-cell colour swatch followed by the hex value.
pub fn swatch(rgb: Rgb) -> String {
    format!(
        "\x1b[48;2;{};{};{}m  {RESET} {CYAN}{}{RESET}",
        rgb.r,
        rgb.g,
        rgb.b,
        rgb.to_hex()
    )
}
