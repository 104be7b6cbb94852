// wallet-core/src/crypto/hash.rs
//
// Hash primitives dùng cho address encoding.
// Tất cả trả về fixed-size arrays, không allocation.

use blake2::digest::consts::{U20, U32};
use blake2::Blake2b;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256, Sha512_256};
use tiny_keccak::{Hasher, Keccak};

type Blake2b160 = Blake2b<U20>;
type Blake2b256 = Blake2b<U32>;

pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice (base58Check checksums, extended keys).
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// RIPEMD-160(SHA-256(data)).
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(sha256(data)).into()
}

/// SHA-512 truncated to 256 bits with its own IV (FIPS 180-4), not a plain
/// truncation of SHA-512.
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    Sha512_256::digest(data).into()
}

/// Original Keccak-256 (pre-NIST padding), as Ethereum and Monero use it.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut out = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut out);
    out
}

pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}

pub fn blake2b_160(data: &[u8]) -> [u8; 20] {
    Blake2b160::digest(data).into()
}
