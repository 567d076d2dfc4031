//! # Wireless Network Model
//!
//! The records produced by one scan cycle and the labels derived from them.

pub mod band;
pub mod mac;
pub mod security;
pub mod wifi;

pub use band::Band;
pub use security::Security;
pub use wifi::{HIDDEN_SSID, Network};
