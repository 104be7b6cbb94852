// wallet-core/src/chains/avalanche.rs
//
// Avalanche - m/44'/9000'/0'/0/index
//
// Một key, nhiều ledger:
//   X-Chain / P-Chain → "<code>-" + bech32("avax", hash160(pubkey))
//   C-Chain           → EIP-55 (EVM)

use super::evm::EvmAddress;
use super::generator::AddressFormatter;
use super::{Coin, CoinDescriptor};
use crate::crypto::export::cb58;
use crate::crypto::hash;
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{CurveType, DerivedKey, PathFamily};
use crate::error::{WalletError, WalletResult};
use crate::wallet::AddressText;
use bech32::{Bech32, Hrp};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const HRP: &str = "avax";

/// Prefix on exported private keys.
pub const PRIVATE_KEY_PREFIX: &str = "PrivateKey-";

/// Avalanche primary-network ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AvaxChain {
    /// Exchange chain
    X,
    /// Platform chain
    P,
    /// Contract chain (EVM)
    C,
}

impl AvaxChain {
    pub const ALL: [AvaxChain; 3] = [AvaxChain::X, AvaxChain::P, AvaxChain::C];

    pub fn code(&self) -> &'static str {
        match self {
            AvaxChain::X => "X",
            AvaxChain::P => "P",
            AvaxChain::C => "C",
        }
    }
}

impl fmt::Display for AvaxChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AvaxChain {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AvaxChain::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| WalletError::parameter("chain", format!("unknown Avalanche chain '{}'", s)))
    }
}

#[derive(Debug, Clone)]
pub struct AvalancheFormatter {
    descriptor: CoinDescriptor,
    chains: Vec<AvaxChain>,
}

impl AvalancheFormatter {
    /// Fails on an empty selection. Duplicates collapse.
    pub fn new(chains: &[AvaxChain]) -> WalletResult<Self> {
        if chains.is_empty() {
            return Err(WalletError::parameter(
                "chains",
                "select at least one Avalanche chain",
            ));
        }

        let mut chains = chains.to_vec();
        chains.sort();
        chains.dedup();

        Ok(Self {
            descriptor: CoinDescriptor {
                coin: Coin::Avalanche,
                purpose: purpose::BIP44,
                coin_type: coin_type::AVALANCHE,
                family: PathFamily::IndexOnly,
                curve: CurveType::Secp256k1,
            },
            chains,
        })
    }

    pub fn chains(&self) -> &[AvaxChain] {
        &self.chains
    }
}

impl AddressFormatter for AvalancheFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    /// Fan the single derived key out across every selected ledger.
    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let key = key.as_secp256k1()?;

        let mut addresses = BTreeMap::new();
        for chain in &self.chains {
            let address = match chain {
                AvaxChain::X | AvaxChain::P => {
                    format!("{}-{}", chain.code(), bech32_address(&key.public_key())?)
                }
                AvaxChain::C => {
                    let bytes = EvmAddress::from_public_key(&key.uncompressed_public_key()?)?;
                    EvmAddress::to_checksum(&bytes)
                }
            };
            addresses.insert(chain.code().to_string(), address);
        }

        Ok(AddressText::PerLedger(addresses))
    }

    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let secret = key.as_secp256k1()?.private_key()?;
        Ok(format!("{}{}", PRIVATE_KEY_PREFIX, cb58(&*secret)))
    }

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(cb58(&key.as_secp256k1()?.public_key()))
    }
}

/// bech32 of hash160(pubkey), no witness version.
fn bech32_address(public_key: &[u8]) -> WalletResult<String> {
    let hrp = Hrp::parse(HRP)
        .map_err(|e| WalletError::EncodingInvariant(format!("bad hrp '{}': {}", HRP, e)))?;
    bech32::encode::<Bech32>(hrp, &hash::hash160(public_key))
        .map_err(|e| WalletError::EncodingInvariant(format!("bech32 encoding failed: {}", e)))
}
