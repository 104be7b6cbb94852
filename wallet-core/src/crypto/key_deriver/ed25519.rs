// wallet-core/src/crypto/key_deriver/ed25519.rs
//
// Ed25519 Key Derivation - SLIP-0010 Standard
//
// Dùng cho: Algorand, Monero (qua scalar reduction)
// Algorithm: HMAC-SHA512 (khác BIP-32, chỉ hỗ trợ hardened derivation)
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// QUAN TRỌNG: SLIP-0010 cho ed25519 CHỈ hỗ trợ hardened child derivation.
// VD: m/44'/283'/0' (OK)    m/44'/283'/0'/0 (INVALID)

use crate::crypto::paths::{AddressPath, HARDENED};
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

use super::KeyDeriver;

type HmacSha512 = Hmac<Sha512>;

/// SLIP-0010 ed25519 node. Secret và chain code tự zeroize khi drop.
#[derive(Clone)]
pub struct Ed25519Key {
    secret: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
    depth: u8,
}

impl Ed25519Key {
    /// 32-byte ed25519 secret (the RFC 8032 seed, not an expanded scalar).
    pub fn private_key(&self) -> &[u8; 32] {
        &self.secret
    }

    pub fn public_key(&self) -> [u8; 32] {
        ed25519_dalek::SigningKey::from_bytes(&self.secret)
            .verifying_key()
            .to_bytes()
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Derive one hardened child.
    pub fn derive_child(&self, segment: u32) -> WalletResult<Self> {
        if segment & HARDENED == 0 {
            return Err(WalletError::InvalidDerivation(format!(
                "Ed25519 SLIP-0010 requires ALL levels to be hardened. Invalid segment: {}",
                segment
            )));
        }

        let (secret, chain_code) =
            Ed25519Deriver::child_key_derive(&self.secret, &self.chain_code, segment)?;

        Ok(Self {
            secret: Zeroizing::new(secret),
            chain_code: Zeroizing::new(chain_code),
            depth: self.depth.saturating_add(1),
        })
    }
}

impl fmt::Debug for Ed25519Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Key")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

/// Ed25519 Key Deriver - SLIP-0010 Standard
///
/// # Khác biệt với secp256k1 (BIP-32)
/// - Master key seed: "ed25519 seed" (thay vì "Bitcoin seed")
/// - Chỉ hỗ trợ hardened derivation (index >= 2^31)
/// - Không cần validate key range (ed25519 key là bất kỳ 32 bytes)
pub struct Ed25519Deriver;

impl Ed25519Deriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    pub fn derive_root(seed: &[u8]) -> WalletResult<Ed25519Key> {
        KeyDeriver::validate_seed(seed)?;

        let (secret, chain_code) = Self::hmac_split(Self::MASTER_SECRET, &[seed])?;
        Ok(Ed25519Key {
            secret: Zeroizing::new(secret),
            chain_code: Zeroizing::new(chain_code),
            depth: 0,
        })
    }

    #[inline]
    pub fn derive_child(parent: &Ed25519Key, segment: u32) -> WalletResult<Ed25519Key> {
        parent.derive_child(segment)
    }

    /// Derive along `path`; every segment must be hardened.
    pub fn derive_path(seed: &[u8], path: &AddressPath) -> WalletResult<Ed25519Key> {
        let mut key = Self::derive_root(seed)?;
        for &segment in path.segments() {
            key = key.derive_child(segment)?;
        }
        Ok(key)
    }

    /// Data = 0x00 || parent_key || ser32(index)
    /// I = HMAC-SHA512(Key = parent_chain_code, Data = Data)
    fn child_key_derive(
        parent_key: &[u8; 32],
        parent_chain_code: &[u8; 32],
        segment: u32,
    ) -> WalletResult<([u8; 32], [u8; 32])> {
        Self::hmac_split(
            parent_chain_code,
            &[&[0x00], parent_key, &segment.to_be_bytes()],
        )
    }

    /// HMAC-SHA512 rồi tách IL (key) / IR (chain code).
    fn hmac_split(key: &[u8], data: &[&[u8]]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = HmacSha512::new_from_slice(key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })?;

        for part in data {
            mac.update(part);
        }
        let result = mac.finalize().into_bytes();

        // Copy into stack buffer we fully control, then zeroize
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut il = [0u8; 32];
        let mut ir = [0u8; 32];
        il.copy_from_slice(&buf[..32]);
        ir.copy_from_slice(&buf[32..]);

        buf.zeroize();

        Ok((il, ir))
    }
}

// =============================================================================
// TESTS
// =============================================================================
