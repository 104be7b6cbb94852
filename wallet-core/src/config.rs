// wallet-core/src/config.rs

use crate::chains::avalanche::AvaxChain;
use serde::{Deserialize, Serialize};

/// Which key texts accompany each address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyOutput {
    pub private_key: bool,
    pub public_key: bool,
}

/// Caller-facing generator options. Every field has a default, so a partial
/// JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub include_private_key: bool,
    pub include_public_key: bool,
    /// Sub-ledgers fanned out from one Avalanche key.
    pub avalanche_chains: Vec<AvaxChain>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            include_private_key: false,
            include_public_key: false,
            avalanche_chains: AvaxChain::ALL.to_vec(),
        }
    }
}

impl GeneratorConfig {
    pub fn key_output(&self) -> KeyOutput {
        KeyOutput {
            private_key: self.include_private_key,
            public_key: self.include_public_key,
        }
    }
}
