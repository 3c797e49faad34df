//! Emulator configuration

use serde::{Deserialize, Serialize};

/// Account and region identity used when minting ARNs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorConfig {
    /// Twelve-digit account id
    pub account_id: String,

    /// Region name, e.g. `us-east-1`
    pub region: String,

    /// ARN partition
    pub partition: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            account_id: "000000000000".to_string(),
            region: "us-east-1".to_string(),
            partition: "aws".to_string(),
        }
    }
}
