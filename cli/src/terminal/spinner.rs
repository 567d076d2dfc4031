use colored::*;
use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::terminal::colors;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// A span that shows a spinner for as long as it is entered.
pub fn scan_span(interface: &str) -> Span {
    let span = info_span!("scan", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&format!(
        "Scanning {}...",
        interface.color(colors::CYAN).bold()
    ));
    span
}

pub fn report_round(span: &Span, round: u32, rounds: u32, found: usize) {
    span.pb_set_message(&format!(
        "Round {}/{}: {} networks in view",
        round,
        rounds,
        found.to_string().green().bold()
    ));
}
