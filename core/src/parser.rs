//! # Scan Output Parser
//!
//! Turns the text printed by `iw dev <iface> scan` into [`Network`] records.
//!
//! The output is a sequence of blocks, one per access point, each opened by a
//! `BSS <address>` line and followed by indented, loosely labelled fields. Any
//! field may be missing. Parsing is done in small steps:
//!
//! 1. [`blocks`] splits the blob at every block start.
//! 2. [`fields`] pulls the address, name, signal, frequency and explicit
//!    channel out of a block.
//! 3. [`security`] classifies the advertised capabilities.
//!
//! A block without a valid address is dropped; a missing field falls back to
//! its zero value. Nothing here can fail.

use std::time::SystemTime;

use spectr_common::network::{Network, band};

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        fn $name() -> &'static regex::Regex {
            static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
            RE.get_or_init(|| regex::Regex::new($re).expect("built-in pattern must compile"))
        }
    };
}

pub mod blocks;
pub mod fields;
pub mod security;

/// Parses a full scan blob, stamping every record with the current time.
pub fn parse_scan_output(output: &str) -> Vec<Network> {
    parse_scan_output_at(output, SystemTime::now())
}

/// Parses a full scan blob with an explicit batch timestamp.
///
/// The result is ordered by signal strength, strongest first. Networks with
/// equal signal keep the order in which they appeared in `output`.
pub fn parse_scan_output_at(output: &str, observed_at: SystemTime) -> Vec<Network> {
    let mut networks: Vec<Network> = blocks::split(output)
        .filter_map(|block| parse_block(block, observed_at))
        .collect();

    // stable
    networks.sort_by(|a, b| b.signal.cmp(&a.signal));
    networks
}

/// Builds one record from one block, or `None` when the block does not start
/// with a hardware address.
pub fn parse_block(block: &str, observed_at: SystemTime) -> Option<Network> {
    let bssid = fields::address(block)?;
    let frequency = fields::frequency(block);
    let channel =
        fields::explicit_channel(block).unwrap_or_else(|| band::channel_from_frequency(frequency));

    Some(Network {
        bssid,
        ssid: fields::ssid(block),
        signal: fields::signal(block),
        frequency,
        channel,
        security: security::classify(block),
        observed_at,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
