use std::fmt::Display;

use colored::*;
use spectr_common::{info, macros::PRINT_TARGET};
use unicode_width::UnicodeWidthStr;

use crate::terminal::{banner, colors};

/// Width of every rule and centered line in report output.
pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 9;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Writes `msg` verbatim through the logging layer, so report lines and log
/// lines never interleave mid-line with the spinner.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// `fill` on both sides of `title`, `TOTAL_WIDTH` columns in total.
fn titled_rule(title: &ColoredString, fill: &str) -> String {
    let free = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&title.to_string()));
    let left = free / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).bright_black(),
        title,
        fill.repeat(free - left).bright_black()
    )
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let title = format!("⟦ SPECTR//SCAN v{} ⟧", env!("CARGO_PKG_VERSION"))
        .color(colors::CYAN)
        .bold();
    print(&titled_rule(&title, "═"));
    banner::print();
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title = format!("⟦ {} ⟧", msg.to_uppercase()).color(colors::HOT_PINK);
    print(&titled_rule(&title, "─"));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg.as_ref()));
}

/// `> Key.......: value`
pub fn aligned_line(key: &str, value: impl Into<ColoredString>) {
    let dots = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.into()
    ));
}

/// `[idx] name  tag`
pub fn tree_head(idx: usize, name: &str, tag: impl Display) {
    print(&format!(
        "{}{}{} {}  {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY),
        tag
    ));
}

/// One branch per pair; keys are padded to the longest key with dots.
pub fn as_tree_one_level(details: &[(String, ColoredString)]) {
    let key_width = details
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0)
        .max(KEY_WIDTH);

    let mut rows = details.iter().peekable();
    while let Some((key, value)) = rows.next() {
        let branch = if rows.peek().is_some() { "├─" } else { "└─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width - key.width()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let pad = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{pad}{msg}"));
}

const NO_RESULTS: &str = r#"
         _  _  ___    ___ ___ ___ _  _   _   _    ___
        | \| |/ _ \  / __|_ _/ __| \| | /_\ | |  / __|
        | .` | (_) | \__ \| | (_ | .` |/ _ \| |__\__ \
        |_|\_|\___/  |___/___\___|_|\_/_/ \_\____|___/
"#;

pub fn no_results() {
    print(&NO_RESULTS.color(colors::RED).bold().to_string());
}
