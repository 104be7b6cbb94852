// wallet-core/src/chains/monero.rs
//
// Monero - standard mainnet address, m/44'/128'/account'
//
// SLIP-0010 ed25519 node → sc_reduce → private spend key
// private view key = sc_reduce(keccak256(private spend key))
// Address: chunked base58(0x12 ‖ spend pub ‖ view pub ‖ keccak256[..4]) → 95 ký tự

use super::generator::AddressFormatter;
use super::{Coin, CoinDescriptor};
use crate::crypto::hash::keccak256;
use crate::crypto::key_deriver::Ed25519Key;
use crate::crypto::paths::{coin_type, purpose};
use crate::crypto::{Checksum, CurveType, DerivedKey, PathFamily};
use crate::encoding::{base58, hex_upper};
use crate::error::WalletResult;
use crate::wallet::AddressText;
use curve25519_dalek::{EdwardsPoint, Scalar};
use zeroize::Zeroize;

/// Mainnet standard-address network byte.
pub const MAINNET_PREFIX: u8 = 0x12;

pub const ADDRESS_LENGTH: usize = 95;

/// Spend / view key pair, zeroized on drop.
pub struct MoneroKeys {
    spend_secret: Scalar,
    view_secret: Scalar,
}

impl MoneroKeys {
    pub fn from_node(node: &Ed25519Key) -> Self {
        let spend_secret = Scalar::from_bytes_mod_order(*node.private_key());
        let view_secret = Scalar::from_bytes_mod_order(keccak256(spend_secret.as_bytes()));
        Self {
            spend_secret,
            view_secret,
        }
    }

    pub fn private_spend_key(&self) -> [u8; 32] {
        self.spend_secret.to_bytes()
    }

    pub fn private_view_key(&self) -> [u8; 32] {
        self.view_secret.to_bytes()
    }

    pub fn public_spend_key(&self) -> [u8; 32] {
        EdwardsPoint::mul_base(&self.spend_secret).compress().to_bytes()
    }

    pub fn public_view_key(&self) -> [u8; 32] {
        EdwardsPoint::mul_base(&self.view_secret).compress().to_bytes()
    }

    pub fn address(&self) -> String {
        encode_address(&self.public_spend_key(), &self.public_view_key())
    }
}

impl Drop for MoneroKeys {
    fn drop(&mut self) {
        self.spend_secret.zeroize();
        self.view_secret.zeroize();
    }
}

pub fn encode_address(public_spend: &[u8; 32], public_view: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(1 + 32 + 32);
    payload.push(MAINNET_PREFIX);
    payload.extend_from_slice(public_spend);
    payload.extend_from_slice(public_view);
    base58::encode_chunked(&Checksum::Keccak256.append(&payload))
}

#[derive(Debug, Clone)]
pub struct MoneroFormatter {
    descriptor: CoinDescriptor,
}

impl MoneroFormatter {
    pub fn new() -> Self {
        Self {
            descriptor: CoinDescriptor {
                coin: Coin::Monero,
                purpose: purpose::BIP44,
                coin_type: coin_type::MONERO,
                family: PathFamily::AccountOnly,
                curve: CurveType::Ed25519,
            },
        }
    }
}

impl Default for MoneroFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressFormatter for MoneroFormatter {
    fn descriptor(&self) -> &CoinDescriptor {
        &self.descriptor
    }

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText> {
        let keys = MoneroKeys::from_node(key.as_ed25519()?);
        Ok(AddressText::Single(keys.address()))
    }

    /// Private spend key; the view key follows from it.
    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let keys = MoneroKeys::from_node(key.as_ed25519()?);
        let mut spend = keys.private_spend_key();
        let text = hex_upper(&spend);
        spend.zeroize();
        Ok(text)
    }

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String> {
        let keys = MoneroKeys::from_node(key.as_ed25519()?);
        Ok(hex_upper(&keys.public_spend_key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{HdWalletGenerator, WalletGenerator};
    use crate::config::KeyOutput;
    use crate::crypto::key_deriver::Ed25519Deriver;
    use crate::crypto::{AddressPath, Position};

    const TEST_SEED: &str = "16270f7b026afe7a3746efbfcf43e083500951db9e2699d1e4f372515dabcc80459b9181c3937b5faa4b8f7602f886553d2c32c5f12f3331cef40153aead4de6";

    fn node(account: u32) -> Ed25519Key {
        let seed = hex::decode(TEST_SEED).unwrap();
        let path = AddressPath::account_level(purpose::BIP44, coin_type::MONERO, account).unwrap();
        Ed25519Deriver::derive_path(&seed, &path).unwrap()
    }

    #[test]
    fn test_address_shape() {
        let keys = MoneroKeys::from_node(&node(0));
        let address = keys.address();
        assert_eq!(address.len(), ADDRESS_LENGTH);
        assert!(address.starts_with('4'));
    }

    #[test]
    fn test_view_key_derivation() {
        let keys = MoneroKeys::from_node(&node(0));
        let expected = Scalar::from_bytes_mod_order(keccak256(&keys.private_spend_key()));
        assert_eq!(keys.private_view_key(), expected.to_bytes());
    }

    #[test]
    fn test_spend_key_is_reduced() {
        let keys = MoneroKeys::from_node(&node(0));
        let spend = keys.private_spend_key();
        // canonical scalars are < l, so the top nibble is clear
        assert!(spend[31] <= 0x10);
        assert!(Option::<Scalar>::from(Scalar::from_canonical_bytes(spend)).is_some());
    }

    #[test]
    fn test_address_uses_both_public_keys() {
        let keys = MoneroKeys::from_node(&node(0));
        let address = encode_address(&keys.public_spend_key(), &keys.public_view_key());
        let swapped = encode_address(&keys.public_view_key(), &keys.public_spend_key());
        assert_eq!(address, keys.address());
        assert_ne!(address, swapped);
    }

    const DONATION_ADDRESS: &str = "44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A";

    #[test]
    fn test_known_address_layout() {
        let raw = base58::decode_chunked(DONATION_ADDRESS).unwrap();
        assert_eq!(raw.len(), 69);
        assert_eq!(raw[0], MAINNET_PREFIX);
        assert_eq!(&raw[65..], &Checksum::Keccak256.compute(&raw[..65])[..]);
        assert_eq!(
            hex::encode(&raw[1..33]),
            "42f18fc61586554095b0799b5c4b6f00cdeb26a93b20540d366932c6001617b7"
        );

        // spend key first, then view key
        let spend: [u8; 32] = raw[1..33].try_into().unwrap();
        let view: [u8; 32] = raw[33..65].try_into().unwrap();
        assert_eq!(encode_address(&spend, &view), DONATION_ADDRESS);
        assert_eq!(base58::encode_chunked(&raw), DONATION_ADDRESS);
    }

    #[test]
    fn test_generator_accounts() {
        let seed = hex::decode(TEST_SEED).unwrap();
        let output = KeyOutput {
            private_key: true,
            public_key: true,
        };
        let generator = HdWalletGenerator::new(&seed, output, MoneroFormatter::new()).unwrap();
        let wallet = generator
            .generate_wallet(Position::Account { account: 0 }, 2)
            .unwrap();

        let first = &wallet.addresses()[0];
        assert_eq!(first.path().to_string(), "m/44'/128'/0'");
        assert_eq!(first.address().to_string(), MoneroKeys::from_node(&node(0)).address());
        assert_eq!(first.private_key().unwrap().len(), 64);
        assert_eq!(wallet.addresses()[1].path().to_string(), "m/44'/128'/1'");
    }
}
