//! Kernel connection file
//!
//! Jupyter starts a kernel with a JSON file naming the transport, the
//! address, one port per channel and the HMAC key used to sign messages.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{KernelError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    pub transport: String,
    pub ip: String,
    pub shell_port: u16,
    pub iopub_port: u16,
    pub stdin_port: u16,
    pub control_port: u16,
    pub hb_port: u16,
    /// HMAC key; an empty key disables signing
    #[serde(default)]
    pub key: String,
    #[serde(default = "default_signature_scheme")]
    pub signature_scheme: String,
    #[serde(default)]
    pub kernel_name: Option<String>,
}

fn default_signature_scheme() -> String {
    "hmac-sha256".to_string()
}

impl ConnectionInfo {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let info: ConnectionInfo = serde_json::from_str(&text)?;
        info.validate()?;
        Ok(info)
    }

    /// Only HMAC-SHA256 signing is supported
    pub fn validate(&self) -> Result<()> {
        if self.signature_scheme != "hmac-sha256" {
            return Err(KernelError::Connection(format!(
                "Unsupported signature scheme '{}'",
                self.signature_scheme
            )));
        }
        Ok(())
    }

    pub fn iopub_endpoint(&self) -> String {
        format!("{}://{}:{}", self.transport, self.ip, self.iopub_port)
    }
}
