// wallet-core/src/chains/base58check.rs
//
// Legacy P2PKH-style addresses - Dogecoin, Ripple
// Address: base58(version ‖ hash160(pubkey) ‖ double_sha256[..4])

use super::generator::AddressFormatter;
use super::{Coin, CoinDescriptor};
use crate::crypto::export;
use crate::crypto::hash;
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{CurveType, DerivedKey, PathFamily};
use crate::encoding::{hex_upper, Alphabet};
use crate::error::WalletResult;
use crate::wallet::AddressText;

/// How the 32-byte scalar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivateKeyText {
    /// WIF with this identification byte
    Wif(u8),
    /// Uppercase hex
    Hex,
}

#[derive(Debug, Clone)]
pub struct Base58CheckFormatter {
    descriptor: CoinDescriptor,
    version: u8,
    alphabet: &'static Alphabet,
    private_key: PrivateKeyText,
}

impl Base58CheckFormatter {
    /// Dogecoin P2PKH, `D...`
    pub fn dogecoin() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Dogecoin,
                purpose: purpose::BIP44,
                coin_type: coin_type::DOGECOIN,
                family: PathFamily::AccountChangeIndex,
                curve: CurveType::Secp256k1,
            },
            version: 30,
            alphabet: &Alphabet::BITCOIN,
            private_key: PrivateKeyText::Wif(0x9E),
        }
    }

    /// XRP Ledger account ID, `r...`
    pub fn ripple() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Ripple,
                purpose: purpose::BIP44,
                coin_type: coin_type::RIPPLE,
                family: PathFamily::AccountChangeIndex,
                curve: CurveType::Secp256k1,
            },
            version: 0,
            alphabet: &Alphabet::RIPPLE,
            private_key: PrivateKeyText::Hex,
        }
    }
}

impl AddressFormatter for Base58CheckFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let pubkey_hash = hash::hash160(&key.as_secp256k1()?.public_key());

        let mut payload = Vec::with_capacity(1 + pubkey_hash.len());
        payload.push(self.version);
        payload.extend_from_slice(&pubkey_hash);

        Ok(AddressText::Single(export::base58_check(&payload, self.alphabet)))
    }

    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let secret = key.as_secp256k1()?.private_key()?;
        Ok(match self.private_key {
            PrivateKeyText::Wif(prefix) => export::wif(prefix, &secret),
            PrivateKeyText::Hex => hex_upper(&*secret),
        })
    }

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(hex_upper(&key.as_secp256k1()?.public_key()))
    }
}
