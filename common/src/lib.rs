//! Shared types for the SPECTR//SCAN workspace.
//!
//! Everything here is free of process or terminal I/O so that the core and the
//! CLI agree on one data model:
//!
//! * **[`network`]**: the per-scan `Network` record and its derived labels.
//! * **[`config`]**: run-time settings assembled from the command line.
//! * **[`error`]**: errors raised around the scan tool invocation.
//! * **[`vendors`]**: the vendor lookup contract.

pub mod config;
pub mod error;
pub mod macros;
pub mod network;
pub mod vendors;

#[doc(hidden)]
pub use tracing as __tracing;
