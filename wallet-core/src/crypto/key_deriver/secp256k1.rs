// wallet-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44 / BIP-84
//
// Dùng cho: Bitcoin, Litecoin, Dogecoin, Ripple, Ergo, Handshake, Ethereum, Avalanche
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::paths::{AddressPath, HARDENED};
use crate::error::{CryptoError, WalletError, WalletResult};
use bip32::{ChildNumber, ExtendedKeyAttrs, XPrv, XPub};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;
use zeroize::Zeroizing;

use super::KeyDeriver;

/// Compressed SEC1 point length.
pub const PUBLIC_KEY_LENGTH: usize = 33;
/// Uncompressed SEC1 point length (0x04 tag included).
pub const UNCOMPRESSED_PUBLIC_KEY_LENGTH: usize = 65;

#[derive(Clone)]
enum ExtendedKey {
    Private(XPrv),
    Public(XPub),
}

/// One node of a BIP-32 tree: key, chain code, depth, parent fingerprint.
///
/// Holds either a private node or a neutered public one. Chỉ private node mới
/// derive được hardened children.
#[derive(Clone)]
pub struct Secp256k1Key {
    inner: ExtendedKey,
}

impl Secp256k1Key {
    fn attrs(&self) -> &ExtendedKeyAttrs {
        match &self.inner {
            ExtendedKey::Private(k) => k.attrs(),
            ExtendedKey::Public(k) => k.attrs(),
        }
    }

    pub fn has_private_key(&self) -> bool {
        matches!(self.inner, ExtendedKey::Private(_))
    }

    /// Raw 32-byte scalar, auto-zeroize on drop.
    pub fn private_key(&self) -> WalletResult<Zeroizing<[u8; 32]>> {
        match &self.inner {
            ExtendedKey::Private(k) => Ok(Zeroizing::new(k.private_key().to_bytes().into())),
            ExtendedKey::Public(_) => Err(WalletError::InvalidDerivation(
                "key has no private component".to_string(),
            )),
        }
    }

    /// Compressed SEC1 public key.
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        match &self.inner {
            ExtendedKey::Private(k) => k.public_key().to_bytes(),
            ExtendedKey::Public(k) => k.to_bytes(),
        }
    }

    /// Uncompressed SEC1 public key (`0x04 ‖ X ‖ Y`).
    pub fn uncompressed_public_key(&self) -> WalletResult<[u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH]> {
        let point = k256::PublicKey::from_sec1_bytes(&self.public_key()).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Failed to decode public key: {}",
                e
            )))
        })?;

        let encoded = point.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_PUBLIC_KEY_LENGTH];
        out.copy_from_slice(encoded.as_bytes());
        Ok(out)
    }

    pub fn chain_code(&self) -> [u8; 32] {
        self.attrs().chain_code
    }

    pub fn depth(&self) -> u8 {
        self.attrs().depth
    }

    pub fn parent_fingerprint(&self) -> [u8; 4] {
        self.attrs().parent_fingerprint
    }

    /// Child number this node was derived with (hardening bit included).
    pub fn child_number(&self) -> u32 {
        u32::from(self.attrs().child_number)
    }

    /// Drop the private half.
    pub fn neuter(&self) -> Self {
        match &self.inner {
            ExtendedKey::Private(k) => Self {
                inner: ExtendedKey::Public(k.public_key()),
            },
            ExtendedKey::Public(_) => self.clone(),
        }
    }

    /// Derive one child. `segment` carries bit 31 when hardened.
    pub fn derive_child(&self, segment: u32) -> WalletResult<Self> {
        let child_number = ChildNumber::from(segment);

        let inner = match &self.inner {
            ExtendedKey::Private(k) => ExtendedKey::Private(k.derive_child(child_number).map_err(
                |e| {
                    WalletError::Crypto(CryptoError::DerivationFailed(format!(
                        "Child derivation failed: {}",
                        e
                    )))
                },
            )?),
            ExtendedKey::Public(_) if segment & HARDENED != 0 => {
                return Err(WalletError::InvalidDerivation(format!(
                    "hardened child {}' requested from a public-only key",
                    segment & !HARDENED
                )));
            }
            ExtendedKey::Public(k) => ExtendedKey::Public(k.derive_child(child_number).map_err(
                |e| {
                    WalletError::Crypto(CryptoError::DerivationFailed(format!(
                        "Public child derivation failed: {}",
                        e
                    )))
                },
            )?),
        };

        Ok(Self { inner })
    }
}

impl fmt::Debug for Secp256k1Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Key")
            .field("private", &self.has_private_key())
            .field("depth", &self.depth())
            .field("child_number", &self.child_number())
            .finish_non_exhaustive()
    }
}

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// # Security
/// - Private keys chỉ ra ngoài qua `Zeroizing<[u8; 32]>`
/// - Không cache intermediate keys giữa các lần gọi
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Master node from a BIP-32 seed (16..=64 bytes).
    pub fn derive_root(seed: &[u8]) -> WalletResult<Secp256k1Key> {
        KeyDeriver::validate_seed(seed)?;

        let root = XPrv::new(seed).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Failed to create master key: {}",
                e
            )))
        })?;

        Ok(Secp256k1Key {
            inner: ExtendedKey::Private(root),
        })
    }

    #[inline]
    pub fn derive_child(parent: &Secp256k1Key, segment: u32) -> WalletResult<Secp256k1Key> {
        parent.derive_child(segment)
    }

    /// Repeated child derivation from the root, fresh every call.
    pub fn derive_path(seed: &[u8], path: &AddressPath) -> WalletResult<Secp256k1Key> {
        let mut key = Self::derive_root(seed)?;
        for &segment in path.segments() {
            key = key.derive_child(segment)?;
        }
        Ok(key)
    }
}

// =============================================================================
// TESTS
// =============================================================================
