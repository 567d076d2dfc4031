use std::process::ExitStatus;

use thiserror::Error;

/// Failures around the external scan tool.
///
/// Parsing never fails; these only cover getting the text in the first place.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("no wireless interface detected in 'iw dev' output")]
    NoInterface,

    #[error("invalid hardware address: {0}")]
    InvalidAddress(String),
}
