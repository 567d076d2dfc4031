pub use pnet::util::MacAddr;

use crate::error::ScanError;

/// Parses a colon-separated hardware address in either case.
pub fn parse(address: &str) -> Result<MacAddr, ScanError> {
    address
        .parse::<MacAddr>()
        .map_err(|_| ScanError::InvalidAddress(address.to_string()))
}

/// Uppercase `AA:BB:CC:DD:EE:FF` form used as the session key.
pub fn canonical(address: &str) -> String {
    address.trim().to_ascii_uppercase()
}

/// Locally administered addresses carry bit `0x02` in the first octet and
/// have no registered manufacturer.
pub fn is_locally_administered(mac: MacAddr) -> bool {
    mac.0 & 0x02 != 0
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
