// wallet-core/src/crypto/export.rs
//
// Text exports built on base58 + checksum: base58Check, CB58, WIF and
// BIP-32 extended public keys.

use super::checksum::Checksum;
use super::key_deriver::Secp256k1Key;
use crate::encoding::{base58, be_u32, Alphabet};
use crate::error::{WalletError, WalletResult};

/// Serialized extended key length before the checksum.
pub const EXTENDED_KEY_LENGTH: usize = 78;

/// Compression flag appended to WIF payloads.
const WIF_COMPRESSED: u8 = 0x01;

/// Extended public key version tags.
pub mod version {
    /// BIP-32 mainnet `xpub`
    pub const XPUB: u32 = 0x0488_B21E;
    /// BIP-84 mainnet `zpub`
    pub const ZPUB: u32 = 0x04B2_4746;
}

/// `base58(payload ‖ double_sha256(payload)[..4])`
pub fn base58_check(payload: &[u8], alphabet: &Alphabet) -> String {
    base58::encode(&Checksum::DoubleSha256.append(payload), alphabet)
}

/// Avalanche CB58: `base58(payload ‖ sha256(payload)[28..])`
pub fn cb58(payload: &[u8]) -> String {
    base58::encode(&Checksum::Sha256Tail.append(payload), &Alphabet::BITCOIN)
}

/// Wallet Import Format for a compressed-pubkey key.
///
/// Always the 32-byte scalar, never a 33-byte sign-extended form.
pub fn wif(prefix: u8, secret: &[u8; 32]) -> String {
    let mut payload = zeroize::Zeroizing::new(Vec::with_capacity(34));
    payload.push(prefix);
    payload.extend_from_slice(secret);
    payload.push(WIF_COMPRESSED);
    base58_check(&payload, &Alphabet::BITCOIN)
}

/// BIP-32 serialization of the public half of `key`.
///
/// `version ‖ depth ‖ parent fingerprint ‖ child number ‖ chain code ‖ pubkey`
pub fn extended_public_key(version: u32, key: &Secp256k1Key) -> WalletResult<String> {
    let mut record = Vec::with_capacity(EXTENDED_KEY_LENGTH);
    record.extend_from_slice(&be_u32(version));
    record.push(key.depth());
    record.extend_from_slice(&key.parent_fingerprint());
    record.extend_from_slice(&be_u32(key.child_number()));
    record.extend_from_slice(&key.chain_code());
    record.extend_from_slice(&key.public_key());

    if record.len() != EXTENDED_KEY_LENGTH {
        return Err(WalletError::EncodingInvariant(format!(
            "extended key record is {} bytes, expected {}",
            record.len(),
            EXTENDED_KEY_LENGTH
        )));
    }

    Ok(base58_check(&record, &Alphabet::BITCOIN))
}
