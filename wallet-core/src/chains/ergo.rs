// wallet-core/src/chains/ergo.rs
//
// Ergo P2PK - EIP-3 derivation m/44'/429'/account'/change/index
// Address: base58(prefix ‖ compressed pubkey ‖ blake2b256(prefix ‖ pubkey)[..4])

use super::generator::AddressFormatter;
use super::{Coin, CoinDescriptor};
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{Checksum, CurveType, DerivedKey, PathFamily};
use crate::encoding::{base58, hex_upper, Alphabet};
use crate::error::WalletResult;
use crate::wallet::AddressText;

/// Mainnet network byte (0x00) plus the P2PK address type (0x01).
pub const MAINNET_P2PK_PREFIX: u8 = 0x01;

#[derive(Debug, Clone)]
pub struct ErgoFormatter {
    descriptor: CoinDescriptor,
}

impl ErgoFormatter {
    pub fn new() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Ergo,
                purpose: purpose::BIP44,
                coin_type: coin_type::ERGO,
                family: PathFamily::AccountChangeIndex,
                curve: CurveType::Secp256k1,
            },
        }
    }
}

impl Default for ErgoFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressFormatter for ErgoFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let public_key = key.as_secp256k1()?.public_key();

        let mut payload = Vec::with_capacity(1 + public_key.len());
        payload.push(MAINNET_P2PK_PREFIX);
        payload.extend_from_slice(&public_key);

        let encoded = base58::encode(&Checksum::Blake2b256.append(&payload), &Alphabet::BITCOIN);
        Ok(AddressText::Single(encoded))
    }

    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(hex_upper(&*key.as_secp256k1()?.private_key()?))
    }

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(hex_upper(&key.as_secp256k1()?.public_key()))
    }
}
