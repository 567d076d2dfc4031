use std::time::{Instant, SystemTime};

use colored::*;
use spectr_common::network::Network;
use spectr_core::session::Session;
use spectr_core::vendors::Vendor;

use super::fresh::FreshMarks;
use super::view::{Footer, View};
use crate::terminal::dashboard::{fit, fit_right, rule};
use crate::terminal::{colors, format};

const SSID_MIN: usize = 12;
const SSID_MAX: usize = 32;
/// Marker, bars, dBm, spark, BSSID, vendor, channel, freq, band, security
/// plus the single-space gutters between them.
const FIXED_WIDTH: usize = 1 + 10 + 4 + 10 + 17 + 16 + 3 + 5 + 4 + 8 + 10;
/// Header (3), column titles (1), bottom rule (1), footer (1).
const CHROME_ROWS: usize = 6;

/// Everything the renderer needs besides the view itself.
pub struct Frame<'a> {
    pub session: &'a Session,
    pub fresh: &'a FreshMarks,
    pub vendor: &'a dyn Fn(&str) -> Vendor,
    pub now: Instant,
    pub wall_clock: SystemTime,
    pub size: (u16, u16),
}

/// Renders one full frame as terminal lines.
pub fn render(view: &View, frame: &Frame<'_>) -> Vec<String> {
    let width = frame.size.0 as usize;
    let height = frame.size.1 as usize;
    let body_rows = height.saturating_sub(CHROME_ROWS).max(1);

    let mut lines = header(view, frame.now);
    lines.push(rule(width));

    if view.detail
        && let Some(network) = view.selected_network()
    {
        lines.extend(detail(network, frame));
    } else {
        let ssid_width = width.saturating_sub(FIXED_WIDTH).clamp(SSID_MIN, SSID_MAX);
        lines.push(column_titles(ssid_width));
        lines.extend(table(view, frame, ssid_width, body_rows));
    }

    while lines.len() < height.saturating_sub(2) {
        lines.push(String::new());
    }
    lines.push(rule(width));
    lines.push(footer(view));
    lines
}

fn header(view: &View, now: Instant) -> Vec<String> {
    let sep = "│".color(colors::DIM);

    let mode = if view.demo {
        "◉ DEMO".color(colors::ORANGE)
    } else {
        "◉ LIVE".color(colors::GREEN)
    };
    let status = if view.scanning {
        "SCANNING".color(colors::CYAN)
    } else {
        "READY".color(colors::GREEN)
    };
    let last_scan = match view.last_scan {
        Some(at) => format!("{}s ago", now.saturating_duration_since(at).as_secs()),
        None => "—".to_string(),
    };

    let title = format!(
        " {} {}{}{} {}    {}    {}    {} {}",
        "◈".color(colors::HOT_PINK),
        "SPECTR".color(colors::CYAN).bold(),
        "//".color(colors::MAGENTA),
        "SCAN".color(colors::CYAN).bold(),
        "◈".color(colors::HOT_PINK),
        "WiFi Spectrum Analyzer".color(colors::MUTED),
        mode,
        "Status:".color(colors::DIM),
        status,
    );
    let stats = format!(
        " {} {}  {}  {} {}  {}  {} {}  {}  {} {}",
        "Interface:".color(colors::DIM),
        view.interface.color(colors::CYAN),
        sep,
        "Networks:".color(colors::DIM),
        view.networks.len().to_string().color(colors::CYAN),
        sep,
        "Last Scan:".color(colors::DIM),
        last_scan.color(colors::CYAN),
        sep,
        "Sort:".color(colors::DIM),
        view.sort.label().color(colors::GREEN),
    );

    vec![title, stats]
}

fn column_titles(ssid_width: usize) -> String {
    let cells = [
        fit("", 1),
        fit("SIGNAL", 10),
        fit_right("dBm", 4),
        fit("SPARK", 10),
        fit("SSID", ssid_width),
        fit("BSSID", 17),
        fit("VENDOR", 16),
        fit_right("CH", 3),
        fit_right("FREQ", 5),
        fit("BAND", 4),
        fit("SECURITY", 8),
    ];
    cells.join(" ").color(colors::MAGENTA).bold().to_string()
}

/// First row to show so the selection stays on screen.
pub fn scroll_offset(selected: usize, rows: usize) -> usize {
    if rows == 0 || selected < rows {
        0
    } else {
        selected + 1 - rows
    }
}

fn table(view: &View, frame: &Frame<'_>, ssid_width: usize, rows: usize) -> Vec<String> {
    if view.networks.is_empty() {
        let msg = if view.scanning { "Scanning..." } else { "No networks in view." };
        return vec![format!(" {}", msg.color(colors::MUTED))];
    }

    let offset = scroll_offset(view.selected, rows);
    view.networks
        .iter()
        .enumerate()
        .skip(offset)
        .take(rows)
        .map(|(idx, network)| row(network, idx == view.selected, frame, ssid_width))
        .collect()
}

fn row(network: &Network, selected: bool, frame: &Frame<'_>, ssid_width: usize) -> String {
    let (_, bar_color) = format::signal_bars(network.signal);
    let spark = frame
        .session
        .get(&network.bssid)
        .map(|history| history.sparkline())
        .unwrap_or_default();
    let vendor = (frame.vendor)(&network.bssid);
    let band = network.band();

    let ssid = if frame.fresh.is_fresh(&network.bssid, frame.now) {
        format!(
            "{} {}",
            "NEW".color(colors::HOT_PINK).bold(),
            fit(&network.ssid, ssid_width.saturating_sub(4)).color(format::ssid_color(network))
        )
    } else {
        fit(&network.ssid, ssid_width)
            .color(format::ssid_color(network))
            .to_string()
    };

    let marker = if selected {
        "▶".color(colors::HOT_PINK)
    } else {
        " ".normal()
    };

    let cells = [
        marker.to_string(),
        format::bar_string(network.signal).to_string(),
        fit_right(&network.signal.to_string(), 4).color(bar_color).to_string(),
        fit(&spark, 10).color(colors::CYAN).to_string(),
        ssid,
        fit(&network.bssid, 17).color(colors::MAC_ADDR).to_string(),
        fit(&vendor.to_string(), 16)
            .color(format::vendor_color(&vendor))
            .to_string(),
        fit_right(&network.channel.to_string(), 3)
            .color(colors::YELLOW)
            .to_string(),
        fit_right(&network.frequency.to_string(), 5)
            .color(colors::MUTED)
            .to_string(),
        fit(band.label(), 4).color(format::band_color(band)).to_string(),
        fit(network.security.label(), 8)
            .color(format::security_color(network.security))
            .to_string(),
    ];

    cells.join(" ")
}

fn detail(network: &Network, frame: &Frame<'_>) -> Vec<String> {
    let history = frame.session.get(&network.bssid);
    let vendor = (frame.vendor)(&network.bssid);

    let mut lines = vec![
        format!(
            " {} {} {}",
            "◈".color(colors::HOT_PINK),
            "NETWORK DETAIL".color(colors::CYAN).bold(),
            "◈".color(colors::HOT_PINK)
        ),
        String::new(),
        format!(
            "   {} {}",
            fit("SSID", 12).color(colors::DIM),
            network.ssid.color(format::ssid_color(network))
        ),
    ];

    for (key, value) in format::network_details(network, history.as_ref(), &vendor, frame.wall_clock) {
        lines.push(format!(
            "   {} {}",
            fit(&key.to_uppercase(), 12).color(colors::DIM),
            value
        ));
    }

    lines.push(String::new());
    lines.push(format!("   {}", "Press Esc or Enter to close".color(colors::DIM)));
    lines
}

fn footer(view: &View) -> String {
    match &view.footer {
        Footer::Help => {
            let key = |k: &str| k.color(colors::CYAN).to_string();
            format!(
                " {}{}  {}{}  {}{}  {}{}  {}{}  {}  {}",
                key("[Q]"),
                "uit".color(colors::MUTED),
                key("[R]"),
                "escan".color(colors::MUTED),
                key("[S]"),
                "ort".color(colors::MUTED),
                key("[Enter]"),
                " Detail".color(colors::MUTED),
                key("[↑↓]"),
                " Navigate".color(colors::MUTED),
                "│".color(colors::DIM),
                format!("Auto-refresh: {}s", view.refresh.as_secs()).color(colors::DIM),
            )
        }
        Footer::Alert { count, .. } => {
            let noun = if *count == 1 { "network" } else { "networks" };
            format!(" {}", format!("⚡ {} new {} discovered!", count, noun).color(colors::HOT_PINK))
        }
        Footer::Error(message) => {
            format!(" {}", format!("✗ Scan error: {}", message).color(colors::RED))
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
