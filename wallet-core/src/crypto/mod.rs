// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Key Derivation**: BIP-32 secp256k1 and SLIP-0010 ed25519 behind one
//!   gateway, via [`KeyDeriver`].
//! - **Derivation Paths**: family-aware path builder via [`AddressPath`].
//! - **Hashing & Checksums**: SHA-2, RIPEMD-160, Keccak, BLAKE2b and the
//!   4-byte [`Checksum`] strategies coins append before encoding.
//! - **Exports**: WIF, base58Check, CB58 and extended public keys.

pub mod checksum;
pub mod export;
pub mod hash;
pub mod key_deriver;
pub mod paths;

// Re-exports for cleaner API access
pub use checksum::Checksum;
pub use key_deriver::{CurveType, DerivedKey, KeyDeriver};
pub use paths::{AddressPath, PathFamily, Position, HARDENED};
