// wallet-core/src/chains/generator.rs
//
// Shared derivation routine. Mỗi coin chỉ cung cấp descriptor + cách format
// address/key text; HdWalletGenerator lo path, derivation, validation.

use super::{Coin, CoinDescriptor};
use crate::config::KeyOutput;
use crate::crypto::export::extended_public_key;
use crate::crypto::{AddressPath, DerivedKey, KeyDeriver, PathFamily, Position};
use crate::error::{WalletError, WalletResult};
use crate::wallet::{AddressText, ExtendedKey, Wallet, WalletAddress};
use std::fmt;
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Per-coin address algorithm over a key the generator already derived.
pub trait AddressFormatter: Send + Sync {
    fn descriptor(&self) -> &CoinDescriptor;

    fn address(&self, key: &DerivedKey) -> WalletResult<AddressText>;

    fn private_key_text(&self, key: &DerivedKey) -> WalletResult<String>;

    fn public_key_text(&self, key: &DerivedKey) -> WalletResult<String>;

    /// Path the key is actually derived at. Defaults to the reported path;
    /// coins whose key slot differs from their labelled path override it.
    fn key_path(&self, position: &Position) -> WalletResult<AddressPath> {
        let descriptor = self.descriptor();
        AddressPath::new(descriptor.purpose, descriptor.coin_type, position)
    }

    /// Version tag when the coin publishes an account-level extended public key.
    fn extended_key_version(&self) -> Option<u32> {
        None
    }
}

/// Capability set every coin exposes.
pub trait WalletGenerator: Send + Sync {
    fn coin(&self) -> Coin;

    fn family(&self) -> PathFamily;

    /// One address at the family's zero position.
    fn generate_default_wallet(&self) -> WalletResult<Wallet> {
        self.generate_wallet(Position::origin(self.family()), 1)
    }

    /// `num_addresses` consecutive addresses from `start`, stepping the
    /// innermost varying segment.
    fn generate_wallet(&self, start: Position, num_addresses: u32) -> WalletResult<Wallet>;
}

/// [`WalletGenerator`] for any coin, parameterized by its formatter.
///
/// Holds its own copy of the seed (zeroized on drop) and nothing else that
/// changes between calls, so one instance can serve many threads.
pub struct HdWalletGenerator<F> {
    seed: Zeroizing<Vec<u8>>,
    output: KeyOutput,
    formatter: F,
}

impl<F: AddressFormatter> HdWalletGenerator<F> {
    pub fn new(seed: &[u8], output: KeyOutput, formatter: F) -> WalletResult<Self> {
        KeyDeriver::validate_seed(seed)?;
        Ok(Self {
            seed: Zeroizing::new(seed.to_vec()),
            output,
            formatter,
        })
    }

    /// Derive and format the address at one position.
    pub fn derive_address(&self, position: &Position) -> WalletResult<WalletAddress> {
        let descriptor = self.formatter.descriptor();
        let path = AddressPath::new(descriptor.purpose, descriptor.coin_type, position)?;
        let key_path = self.formatter.key_path(position)?;
        let key = KeyDeriver::derive_path(&self.seed, &key_path, descriptor.curve)?;

        let mut record = WalletAddress::new(path, self.formatter.address(&key)?);
        if self.output.private_key {
            record = record.with_private_key(self.formatter.private_key_text(&key)?);
        }
        if self.output.public_key {
            record = record.with_public_key(self.formatter.public_key_text(&key)?);
        }

        debug!(coin = %descriptor.coin, path = %record.path(), "derived address");
        Ok(record)
    }

    fn account_key(&self, account: u32) -> WalletResult<Option<ExtendedKey>> {
        let Some(version) = self.formatter.extended_key_version() else {
            return Ok(None);
        };

        let descriptor = self.formatter.descriptor();
        let path = AddressPath::account_level(descriptor.purpose, descriptor.coin_type, account)?;
        let key = KeyDeriver::derive_path(&self.seed, &path, descriptor.curve)?;
        let key = extended_public_key(version, &key.as_secp256k1()?.neuter())?;

        debug!(coin = %descriptor.coin, path = %path, "derived account extended key");
        Ok(Some(ExtendedKey { path, key }))
    }
}

impl<F: AddressFormatter> WalletGenerator for HdWalletGenerator<F> {
    fn coin(&self) -> Coin {
        self.formatter.descriptor().coin
    }

    fn family(&self) -> PathFamily {
        self.formatter.descriptor().family
    }

    fn generate_wallet(&self, start: Position, num_addresses: u32) -> WalletResult<Wallet> {
        let descriptor = self.formatter.descriptor();

        if start.family() != descriptor.family {
            return Err(WalletError::parameter(
                "position",
                format!(
                    "{} uses {} positions, got {}",
                    descriptor.coin,
                    descriptor.family,
                    start.family()
                ),
            ));
        }
        if num_addresses < 1 {
            return Err(WalletError::parameter("num_addresses", "must be at least 1"));
        }
        // Last position must still be a valid non-hardened value
        start.advance(num_addresses - 1)?;

        let addresses = (0..num_addresses)
            .map(|offset| self.derive_address(&start.advance(offset)?))
            .collect::<WalletResult<Vec<_>>>()?;

        let extended_key = match start {
            Position::AccountChangeIndex { account, .. } => self.account_key(account)?,
            _ => None,
        };

        info!(
            coin = %descriptor.coin,
            addresses = addresses.len(),
            "generated wallet"
        );
        Wallet::new(descriptor.coin, addresses, extended_key)
    }
}

impl<F: AddressFormatter> fmt::Debug for HdWalletGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdWalletGenerator")
            .field("coin", &self.formatter.descriptor().coin)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}
