// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Gateway - Multi-Curve Support
//
// Kiến trúc:
// ┌─────────────────────────────────────────────────┐
// │  Seed (16..=64 bytes, thường 64 từ BIP-39)      │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  secp256k1 (BIP-32)        ed25519 (SLIP-0010)  │
// │  ├─ Bitcoin, Litecoin      ├─ Algorand          │
// │  ├─ Dogecoin, Ripple       └─ Monero            │
// │  ├─ Ergo, Handshake                             │
// │  └─ Ethereum, Avalanche                         │
// └─────────────────────────────────────────────────┘
//
// Gateway contract: derive_root(seed), derive_child(parent, segment),
// derive_path(seed, path). Mỗi address được derive lại từ seed, không cache.

pub mod ed25519;
pub mod secp256k1;

// Re-exports
pub use ed25519::{Ed25519Deriver, Ed25519Key};
pub use secp256k1::{Secp256k1Deriver, Secp256k1Key};

use crate::crypto::paths::AddressPath;
use crate::error::{CryptoError, WalletError, WalletResult};

/// Seed length range accepted by BIP-32 and SLIP-0010.
pub const MIN_SEED_LENGTH: usize = 16;
pub const MAX_SEED_LENGTH: usize = 64;

// =============================================================================
// COMMON TYPES
// =============================================================================
/// Curve type cho key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    /// secp256k1, BIP-32
    Secp256k1,
    /// Ed25519, SLIP-0010, hardened only
    Ed25519,
}

/// Node returned by the gateway, tagged by curve.
#[derive(Debug, Clone)]
pub enum DerivedKey {
    Secp256k1(Secp256k1Key),
    Ed25519(Ed25519Key),
}

impl DerivedKey {
    pub fn curve(&self) -> CurveType {
        match self {
            DerivedKey::Secp256k1(_) => CurveType::Secp256k1,
            DerivedKey::Ed25519(_) => CurveType::Ed25519,
        }
    }

    pub fn as_secp256k1(&self) -> WalletResult<&Secp256k1Key> {
        match self {
            DerivedKey::Secp256k1(k) => Ok(k),
            DerivedKey::Ed25519(_) => Err(curve_mismatch(CurveType::Secp256k1)),
        }
    }

    pub fn as_ed25519(&self) -> WalletResult<&Ed25519Key> {
        match self {
            DerivedKey::Ed25519(k) => Ok(k),
            DerivedKey::Secp256k1(_) => Err(curve_mismatch(CurveType::Ed25519)),
        }
    }

    pub fn depth(&self) -> u8 {
        match self {
            DerivedKey::Secp256k1(k) => k.depth(),
            DerivedKey::Ed25519(k) => k.depth(),
        }
    }
}

fn curve_mismatch(expected: CurveType) -> WalletError {
    WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
        "expected a {:?} key",
        expected
    )))
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================
/// Unified Key Deriver - Entry point cho mọi loại key derivation
pub struct KeyDeriver;

impl KeyDeriver {
    pub fn derive_root(seed: &[u8], curve: CurveType) -> WalletResult<DerivedKey> {
        Ok(match curve {
            CurveType::Secp256k1 => DerivedKey::Secp256k1(Secp256k1Deriver::derive_root(seed)?),
            CurveType::Ed25519 => DerivedKey::Ed25519(Ed25519Deriver::derive_root(seed)?),
        })
    }

    pub fn derive_child(parent: &DerivedKey, segment: u32) -> WalletResult<DerivedKey> {
        Ok(match parent {
            DerivedKey::Secp256k1(k) => DerivedKey::Secp256k1(k.derive_child(segment)?),
            DerivedKey::Ed25519(k) => DerivedKey::Ed25519(k.derive_child(segment)?),
        })
    }

    /// Derive key tự động dựa trên curve type
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (16..=64 bytes)
    /// * `path` - Path đã build sẵn (e.g. m/84'/0'/0'/0/0)
    /// * `curve` - Curve type (secp256k1 hoặc ed25519)
    pub fn derive_path(seed: &[u8], path: &AddressPath, curve: CurveType) -> WalletResult<DerivedKey> {
        Ok(match curve {
            CurveType::Secp256k1 => {
                DerivedKey::Secp256k1(Secp256k1Deriver::derive_path(seed, path)?)
            }
            CurveType::Ed25519 => DerivedKey::Ed25519(Ed25519Deriver::derive_path(seed, path)?),
        })
    }

    /// Validate seed length
    #[inline]
    pub fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if !(MIN_SEED_LENGTH..=MAX_SEED_LENGTH).contains(&seed.len()) {
            return Err(WalletError::InvalidSeed(format!(
                "expected {}..={} bytes, got {}",
                MIN_SEED_LENGTH,
                MAX_SEED_LENGTH,
                seed.len()
            )));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
