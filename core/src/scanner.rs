//! The central **abstraction** over scan text producers.
//!
//! Everything above this module only sees a [`ScanSource`]: something that,
//! when asked, hands back one blob of `iw`-formatted scan output. The live
//! implementation shells out to `iw`; the demo implementation renders a
//! simulated neighbourhood in the same format so both paths share the parser.

use async_trait::async_trait;
use spectr_common::{config::Config, error::ScanError};

pub mod demo;
pub mod iw;

pub use demo::DemoSource;
pub use iw::IwSource;

#[async_trait]
pub trait ScanSource: Send + Sync {
    /// Name of the wireless interface being scanned.
    fn interface(&self) -> &str;

    /// `true` when the output is simulated.
    fn is_demo(&self) -> bool {
        false
    }

    /// Produces one raw scan blob.
    async fn capture(&self) -> Result<String, ScanError>;
}

/// Builds the source described by `cfg`, detecting the interface when the
/// user did not name one.
pub async fn from_config(cfg: &Config) -> Result<Box<dyn ScanSource>, ScanError> {
    if cfg.demo {
        return Ok(Box::new(DemoSource::new(cfg.seed)));
    }

    let source = match &cfg.interface {
        Some(name) => IwSource::new(name.clone()),
        None => IwSource::detect().await?,
    };
    Ok(Box::new(source))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
