//! Splits raw scan text into per-device blocks.

pattern!(block_start, r"(?m)^BSS ");

/// Yields the text following every `BSS ` line start.
///
/// Whatever precedes the first marker is not part of any device and is
/// skipped. Sub-headers that happen to begin with `BSS ` at column zero are
/// still yielded here; [`super::fields::address`] rejects them.
pub fn split(output: &str) -> impl Iterator<Item = &str> {
    block_start().split(output).skip(1)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
