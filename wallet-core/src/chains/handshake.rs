// wallet-core/src/chains/handshake.rs
//
// Handshake (HNS) - bech32 "hs", witness v0, BLAKE2b-160 program
// Path: m/44'/5353'/account'/change/index

use super::bitcoin::{wif_prefix, SegwitFormatter, WitnessProgram};
use super::{Coin, CoinDescriptor};
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{CurveType, PathFamily};

pub const HRP: &str = "hs";

/// Handshake reuses the segwit formatter with its own program hash and
/// no published account key.
pub fn handshake() -> SegwitFormatter {
    SegwitFormatter {
        descriptor: CoinDescriptor {
            coin: Coin::Handshake,
            purpose: purpose::BIP44,
            coin_type: coin_type::HANDSHAKE,
            family: PathFamily::AccountChangeIndex,
            curve: CurveType::Secp256k1,
        },
        hrp: HRP,
        wif_prefix: wif_prefix::BITCOIN,
        program: WitnessProgram::Blake2b160,
        xpub_version: None,
    }
}
