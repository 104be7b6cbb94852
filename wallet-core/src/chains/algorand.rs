// wallet-core/src/chains/algorand.rs
//
// Algorand - ed25519 (SLIP-0010), path hiển thị m/44'/283'/account'
// Key thực tế derive tại m/44'/148'/account' (SEP-0005), để khớp với các
// address đã phát hành trước đây từ cùng seed.
// Address: base32(pubkey ‖ sha512_256(pubkey)[28..32]), 58 ký tự, không padding

use super::generator::AddressFormatter;
use super::{Coin, CoinDescriptor};
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{AddressPath, Checksum, CurveType, DerivedKey, PathFamily, Position};
use crate::encoding::{hex_upper, map_groups, to_5bit_groups, BASE32_TABLE};
use crate::error::WalletResult;
use crate::wallet::AddressText;

/// Encoded address length; the repacked 36 bytes give 64 groups, the
/// trailing padding groups are dropped.
pub const ADDRESS_LENGTH: usize = 58;

/// Algorand address text for a raw ed25519 public key.
pub fn encode_address(public_key: &[u8; 32]) -> String {
    let payload = Checksum::Sha512_256Tail.append(public_key);
    let groups = to_5bit_groups(&payload);
    map_groups(&groups[..ADDRESS_LENGTH], BASE32_TABLE)
}

#[derive(Debug, Clone)]
pub struct AlgorandFormatter {
    descriptor: CoinDescriptor,
}

impl AlgorandFormatter {
    pub fn new() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Algorand,
                purpose: purpose::BIP44,
                coin_type: coin_type::ALGORAND,
                family: PathFamily::AccountOnly,
                curve: CurveType::Ed25519,
            },
        }
    }
}

impl Default for AlgorandFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressFormatter for AlgorandFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    /// Same account slot, Stellar coin type.
    fn key_path(&self, position: &Position) -> WalletResult<AddressPath> {
        AddressPath::new(self.descriptor.purpose, coin_type::STELLAR, position)
    }

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let public_key = key.as_ed25519()?.public_key();
        Ok(AddressText::Single(encode_address(&public_key)))
    }

    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(hex_upper(key.as_ed25519()?.private_key()))
    }

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        Ok(hex_upper(&key.as_ed25519()?.public_key()))
    }
}
