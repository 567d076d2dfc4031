//! Wireless interface detection.

use std::sync::OnceLock;

use regex::Regex;
use spectr_common::error::ScanError;

use crate::scanner::iw;

static INTERFACE_RE: OnceLock<Regex> = OnceLock::new();

fn interface_re() -> &'static Regex {
    INTERFACE_RE.get_or_init(|| Regex::new(r"Interface\s+(\S+)").expect("built-in pattern must compile"))
}

/// First interface name in `iw dev` output.
pub fn parse_interface(iw_dev_output: &str) -> Option<String> {
    interface_re()
        .captures(iw_dev_output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Asks `iw dev` for the first wireless interface.
pub async fn detect_interface() -> Result<String, ScanError> {
    let output = iw::run_iw(iw::IW, &["dev"]).await?;
    parse_interface(&output).ok_or(ScanError::NoInterface)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
