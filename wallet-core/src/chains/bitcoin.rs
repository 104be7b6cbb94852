// wallet-core/src/chains/bitcoin.rs
//
// Native SegWit (BIP-84) - Bitcoin, Litecoin
// Address: bech32(hrp, witness v0, hash160(compressed pubkey))

use super::generator::AddressFormatter;
use super::{Coin, CoinDescriptor};
use crate::crypto::export::{self, version};
use crate::crypto::hash;
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{CurveType, DerivedKey, PathFamily};
use crate::encoding::hex_upper;
use crate::error::{WalletError, WalletResult};
use crate::wallet::AddressText;
use bech32::Hrp;

/// WIF identification bytes.
pub mod wif_prefix {
    pub const BITCOIN: u8 = 0x80;
    pub const LITECOIN: u8 = 0xB0;
}

/// Hash that turns the compressed pubkey into the 20-byte witness program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WitnessProgram {
    Hash160,
    Blake2b160,
}

impl WitnessProgram {
    pub fn compute(self, public_key: &[u8]) -> [u8; 20] {
        match self {
            WitnessProgram::Hash160 => hash::hash160(public_key),
            WitnessProgram::Blake2b160 => hash::blake2b_160(public_key),
        }
    }
}

/// bech32 witness-v0 address for any secp256k1 coin.
#[derive(Debug, Clone)]
pub struct SegwitFormatter {
    pub(crate) descriptor: CoinDescriptor,
    pub(crate) hrp: &'static str,
    pub(crate) wif_prefix: u8,
    pub(crate) program: WitnessProgram,
    pub(crate) xpub_version: Option<u32>,
}

impl SegwitFormatter {
    pub fn bitcoin() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Bitcoin,
                purpose: purpose::BIP84,
                coin_type: coin_type::BITCOIN,
                family: PathFamily::AccountChangeIndex,
                curve: CurveType::Secp256k1,
            },
            hrp: "bc",
            wif_prefix: wif_prefix::BITCOIN,
            program: WitnessProgram::Hash160,
            xpub_version: Some(version::ZPUB),
        }
    }

    pub fn litecoin() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Litecoin,
                purpose: purpose::BIP84,
                coin_type: coin_type::LITECOIN,
                family: PathFamily::AccountChangeIndex,
                curve: CurveType::Secp256k1,
            },
            hrp: "ltc",
            wif_prefix: wif_prefix::LITECOIN,
            program: WitnessProgram::Hash160,
            xpub_version: Some(version::ZPUB),
        }
    }
}

impl AddressFormatter for SegwitFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let public_key = key.as_secp256k1()?.public_key();
        let program = self.program.compute(&public_key);
        Ok(AddressText::Single(segwit_v0(self.hrp, &program)?))
    }

    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let secret = key.as_secp256k1()?.private_key()?;
        Ok(export::wif(self.wif_prefix, &secret))
    }

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(hex_upper(&key.as_secp256k1()?.public_key()))
    }

    fn extended_key_version(&self) -> Option<u32> {
        self.xpub_version
    }
}

/// bech32 (BIP-173) segwit v0 encoding.
pub(crate) fn segwit_v0(hrp: &str, program: &[u8]) -> WalletResult<String> {
    let hrp = Hrp::parse(hrp)
        .map_err(|e| WalletError::EncodingInvariant(format!("bad hrp '{}': {}", hrp, e)))?;
    bech32::segwit::encode_v0(hrp, program)
        .map_err(|e| WalletError::EncodingInvariant(format!("segwit encoding failed: {}", e)))
}
