//! Labelled field extractors. Each one looks at a single block.

use spectr_common::network::{HIDDEN_SSID, mac};

pattern!(address_re, r"^[0-9A-Fa-f]{2}(?::[0-9A-Fa-f]{2}){5}");
pattern!(ssid_re, r"(?m)^[ \t]+SSID:[ \t]*(.*)$");
pattern!(signal_re, r"signal:\s*(-?\d+)");
pattern!(freq_re, r"freq:\s*(\d+)");
pattern!(channel_re, r"DS Parameter set: channel (\d+)");

/// The hardware address at the very start of the block, uppercased.
///
/// The match is strict: exactly six octet pairs, not followed by another hex
/// digit or separator.
pub fn address(block: &str) -> Option<String> {
    let found = address_re().find(block)?;
    let rest = &block[found.end()..];
    if rest.starts_with(|c: char| c.is_ascii_hexdigit() || c == ':') {
        return None;
    }
    Some(mac::canonical(found.as_str()))
}

/// The advertised network name, or [`HIDDEN_SSID`] when empty or absent.
pub fn ssid(block: &str) -> String {
    ssid_re()
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(HIDDEN_SSID)
        .to_string()
}

/// Signal strength in whole dBm, `0` when absent.
pub fn signal(block: &str) -> i32 {
    capture_number(signal_re(), block).unwrap_or(0)
}

/// Carrier frequency in MHz, `0` when absent.
pub fn frequency(block: &str) -> u32 {
    capture_number(freq_re(), block).unwrap_or(0)
}

/// Channel announced in the DS Parameter Set element, if any.
pub fn explicit_channel(block: &str) -> Option<u32> {
    capture_number(channel_re(), block)
}

fn capture_number<T: std::str::FromStr>(re: &regex::Regex, block: &str) -> Option<T> {
    re.captures(block)?.get(1)?.as_str().parse().ok()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
