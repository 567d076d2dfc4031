//! # spectr-core
//!
//! Wireless scan interpretation and session bookkeeping.
//!
//! * **[`parser`]**: raw `iw` scan text into [`Network`](spectr_common::network::Network) records.
//! * **[`session`]**: per-device history across scan cycles, plus sparklines.
//! * **[`scanner`]**: where the raw text comes from (the `iw` tool or the demo generator).
//! * **[`discovery`]**: ties a source to the parser and the vendor lookup.

pub mod discovery;
pub mod interface;
pub mod parser;
pub mod scanner;
pub mod session;
pub mod vendors;
