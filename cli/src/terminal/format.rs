use std::time::SystemTime;

use colored::*;
use spectr_common::network::{Band, Network, Security};
use spectr_core::session::DeviceHistory;
use spectr_core::vendors::Vendor;

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub const MAX_BARS: usize = 10;

/// Maps dBm to a bar count out of [`MAX_BARS`] and the color to draw it in.
pub fn signal_bars(signal: i32) -> (usize, Color) {
    match signal {
        -30.. => (10, colors::GREEN),
        -40.. => (9, colors::GREEN),
        -50.. => (8, colors::GREEN),
        -55.. => (7, colors::CYAN),
        -60.. => (6, colors::CYAN),
        -67.. => (5, colors::YELLOW),
        -70.. => (4, colors::YELLOW),
        -75.. => (3, colors::ORANGE),
        -80.. => (2, colors::ORANGE),
        -90.. => (1, colors::RED),
        _ => (0, colors::RED),
    }
}

pub fn bar_string(signal: i32) -> ColoredString {
    let (bars, color) = signal_bars(signal);
    format!("{}{}", "█".repeat(bars), "░".repeat(MAX_BARS - bars)).color(color)
}

pub fn security_color(security: Security) -> Color {
    match security {
        Security::Open => colors::RED,
        Security::Wep | Security::Wpa => colors::ORANGE,
        Security::Wpa3 => colors::CYAN,
        Security::Wpa2 | Security::Wpa2Wpa => colors::GREEN,
    }
}

pub fn band_color(band: Band) -> Color {
    match band {
        Band::SixGhz => colors::MAGENTA,
        Band::FiveGhz => colors::CYAN,
        Band::TwoGhz => colors::GREEN,
    }
}

pub fn ssid_color(network: &Network) -> Color {
    if network.is_hidden() { colors::DIM } else { colors::CYAN }
}

pub fn vendor_color(vendor: &Vendor) -> Color {
    if vendor.is_known() { colors::GREEN } else { colors::MUTED }
}

/// "12s ago" style age of a timestamp.
pub fn age(at: SystemTime, now: SystemTime) -> String {
    match now.duration_since(at) {
        Ok(elapsed) if elapsed.as_secs() >= 3600 => {
            format!("{}h{:02}m ago", elapsed.as_secs() / 3600, elapsed.as_secs() % 3600 / 60)
        }
        Ok(elapsed) if elapsed.as_secs() >= 60 => {
            format!("{}m{:02}s ago", elapsed.as_secs() / 60, elapsed.as_secs() % 60)
        }
        Ok(elapsed) => format!("{}s ago", elapsed.as_secs()),
        Err(_) => "just now".to_string(),
    }
}

pub fn signal_with_range(network: &Network, history: Option<&DeviceHistory>) -> String {
    match history {
        Some(history) => format!(
            "{} dBm  (min {} / max {})",
            network.signal,
            history.min_signal(),
            history.max_signal()
        ),
        None => format!("{} dBm", network.signal),
    }
}

/// Key/value rows describing one network, shared by the report tree and the
/// dashboard detail view.
pub fn network_details(
    network: &Network,
    history: Option<&DeviceHistory>,
    vendor: &Vendor,
    now: SystemTime,
) -> Vec<Detail> {
    let (_, bar_color) = signal_bars(network.signal);
    let band = network.band();

    let mut details: Vec<Detail> = vec![
        ("BSSID".to_string(), network.bssid.color(colors::MAC_ADDR)),
        ("Vendor".to_string(), vendor.to_string().color(vendor_color(vendor))),
        (
            "Signal".to_string(),
            signal_with_range(network, history).color(bar_color),
        ),
    ];

    if let Some(history) = history {
        let spark = history.sparkline();
        if !spark.is_empty() {
            details.push(("History".to_string(), spark.color(colors::CYAN)));
        }
    }

    details.extend([
        ("Channel".to_string(), network.channel.to_string().color(colors::YELLOW)),
        (
            "Frequency".to_string(),
            format!("{} MHz", network.frequency).color(colors::MUTED),
        ),
        ("Band".to_string(), band.label().color(band_color(band))),
        (
            "Security".to_string(),
            network.security.label().color(security_color(network.security)),
        ),
    ]);

    if let Some(history) = history {
        details.push((
            "First".to_string(),
            age(history.first_seen(), now).color(colors::MUTED),
        ));
        details.push((
            "Last".to_string(),
            age(history.last_seen(), now).color(colors::MUTED),
        ));
    }

    details
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
