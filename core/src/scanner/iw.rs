use async_trait::async_trait;
use tokio::process::Command;

use spectr_common::{error::ScanError, warn};

use super::ScanSource;
use crate::interface;

pub(crate) const IW: &str = "iw";

/// Live scans through `iw dev <iface> scan`.
///
/// Requires root (or `CAP_NET_ADMIN`) for the active scan. When it fails the
/// kernel's cached results are read with `scan dump` instead.
pub struct IwSource {
    interface: String,
    program: String,
}

impl IwSource {
    pub fn new(interface: impl Into<String>) -> Self {
        Self::with_program(interface, IW)
    }

    /// Same as [`IwSource::new`] but runs `program` in place of `iw`.
    pub fn with_program(interface: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            program: program.into(),
        }
    }

    /// Uses the first wireless interface listed by `iw dev`.
    pub async fn detect() -> Result<Self, ScanError> {
        let name = interface::detect_interface().await?;
        Ok(Self::new(name))
    }
}

#[async_trait]
impl ScanSource for IwSource {
    fn interface(&self) -> &str {
        &self.interface
    }

    async fn capture(&self) -> Result<String, ScanError> {
        match run_iw(&self.program, &["dev", &self.interface, "scan"]).await {
            Ok(output) => Ok(output),
            Err(e) => {
                warn!("Active scan failed, reading cached results: {e}");
                run_iw(&self.program, &["dev", &self.interface, "scan", "dump"]).await
            }
        }
    }
}

/// Runs `program` with `args` and returns its stdout.
pub(crate) async fn run_iw(program: &str, args: &[&str]) -> Result<String, ScanError> {
    let command = format!("{program} {}", args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| ScanError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ScanError::CommandFailed {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
