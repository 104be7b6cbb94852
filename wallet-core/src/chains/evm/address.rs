// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::crypto::hash::keccak256;
use crate::error::{CryptoError, WalletError, WalletResult};
use alloy_primitives::Address;

/// Uncompressed SEC1 tag byte.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// EVM Address Generator
///
/// # Flow:  Public Key (65B) → bỏ 0x04 → Keccak256 → Address (20B)
pub struct EvmAddress;

impl EvmAddress {
    /// Derive 20 address bytes from an uncompressed public key.
    ///
    /// # Algorithm (chuẩn Ethereum Yellow Paper)
    /// 1. Bỏ prefix byte 0x04 → `pub_key_raw` (64B)
    /// 2. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 3. `hash[12..32]` → `address` (20B)
    pub fn from_public_key(uncompressed: &[u8; 65]) -> WalletResult<[u8; 20]> {
        if uncompressed[0] != UNCOMPRESSED_TAG {
            return Err(WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "expected uncompressed point tag 0x04, got {:#04x}",
                uncompressed[0]
            ))));
        }

        let hash = keccak256(&uncompressed[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        Ok(address)
    }

    /// EIP-55 mixed-case checksum text, `0x`-prefixed.
    #[inline]
    pub fn to_checksum(bytes: &[u8; 20]) -> String {
        Address::from_slice(bytes).to_checksum(None)
    }

    /// Validate chuỗi có phải Ethereum address hợp lệ không
    ///
    /// Kiểm tra: `0x` prefix + 40 hex chars + EIP-55 checksum (nếu mixed case)
    pub fn is_valid(address: &str) -> bool {
        let body = address.strip_prefix("0x").unwrap_or(address);
        let mixed_case = body.chars().any(|c| c.is_ascii_uppercase())
            && body.chars().any(|c| c.is_ascii_lowercase());

        if mixed_case {
            Address::parse_checksummed(address, None).is_ok()
        } else {
            address.parse::<Address>().is_ok()
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
