// wallet-core/src/chains/evm/ethereum.rs
//
// Ethereum - m/44'/60'/0'/0/index, EIP-55 address

use super::address::EvmAddress;
use crate::chains::generator::AddressFormatter;
use crate::chains::{Coin, CoinDescriptor};
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{CurveType, DerivedKey, PathFamily};
use crate::error::WalletResult;
use crate::wallet::AddressText;

#[derive(Debug, Clone)]
pub struct EthereumFormatter {
    descriptor: CoinDescriptor,
}

impl EthereumFormatter {
    pub fn new() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Ethereum,
                purpose: purpose::BIP44,
                coin_type: coin_type::ETHEREUM,
                family: PathFamily::IndexOnly,
                curve: CurveType::Secp256k1,
            },
        }
    }
}

impl Default for EthereumFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressFormatter for EthereumFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let public = key.as_secp256k1()?.uncompressed_public_key()?;
        let bytes = EvmAddress::from_public_key(&public)?;
        Ok(AddressText::Single(EvmAddress::to_checksum(&bytes)))
    }

    /// `0x` + lowercase hex, the form wallets import.
    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let secret = key.as_secp256k1()?.private_key()?;
        Ok(format!("0x{}", hex::encode(&*secret)))
    }

    /// `0x` + 64-byte uncompressed point without the 0x04 tag.
    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let public = key.as_secp256k1()?.uncompressed_public_key()?;
        Ok(format!("0x{}", hex::encode(&public[1..])))
    }
}
