// wallet-core/src/crypto/checksum.rs
//
// 4-byte checksums appended before text encoding. Mỗi coin chọn hash riêng,
// nên payload builders chỉ cần nêu tên strategy.

use super::hash;

pub const CHECKSUM_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checksum {
    /// First 4 bytes of SHA-256(SHA-256(payload)), for base58Check, WIF, xpub.
    DoubleSha256,
    /// Last 4 bytes of SHA-256(payload), for Avalanche CB58.
    Sha256Tail,
    /// First 4 bytes of Keccak-256(payload), for Monero.
    Keccak256,
    /// First 4 bytes of BLAKE2b-256(payload), for Ergo.
    Blake2b256,
    /// Last 4 bytes of SHA-512/256(payload), for Algorand.
    Sha512_256Tail,
}

impl Checksum {
    pub fn compute(self, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
        let digest = match self {
            Checksum::DoubleSha256 => hash::double_sha256(payload),
            Checksum::Sha256Tail => hash::sha256(payload),
            Checksum::Keccak256 => hash::keccak256(payload),
            Checksum::Blake2b256 => hash::blake2b_256(payload),
            Checksum::Sha512_256Tail => hash::sha512_256(payload),
        };

        let start = match self {
            Checksum::Sha256Tail | Checksum::Sha512_256Tail => digest.len() - CHECKSUM_LENGTH,
            _ => 0,
        };

        let mut out = [0u8; CHECKSUM_LENGTH];
        out.copy_from_slice(&digest[start..start + CHECKSUM_LENGTH]);
        out
    }

    /// `payload ‖ checksum(payload)`
    pub fn append(self, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(payload.len() + CHECKSUM_LENGTH);
        out.extend_from_slice(payload);
        out.extend_from_slice(&self.compute(payload));
        out
    }
}
