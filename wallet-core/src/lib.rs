// wallet-core/src/lib.rs

//! Offline HD wallet address derivation for many coins.
//!
//! ```text
//! seed ──► KeyDeriver (BIP-32 / SLIP-0010) ──► AddressFormatter (per coin) ──► Wallet
//!              ▲                                      │
//!         AddressPath (family + position)        encoding::{base58, bits, bytes}
//! ```
//!
//! Pick a generator with [`generator_for`], then call
//! [`WalletGenerator::generate_default_wallet`] or
//! [`WalletGenerator::generate_wallet`].

pub mod chains;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod wallet;

pub use chains::{generator_for, Coin, WalletGenerator};
pub use config::{GeneratorConfig, KeyOutput};
pub use crypto::{AddressPath, PathFamily, Position};
pub use error::{WalletError, WalletResult};
pub use wallet::{AddressText, ExtendedKey, Wallet, WalletAddress};
