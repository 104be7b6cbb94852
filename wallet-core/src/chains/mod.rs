// wallet-core/src/chains/mod.rs

//! Per-coin wallet generators
//!
//! Mỗi coin = một [`CoinDescriptor`] (hằng số) + một [`AddressFormatter`]
//! (thuật toán address). [`generator_for`] ghép chúng với seed thành một
//! [`WalletGenerator`].

pub mod algorand;
pub mod avalanche;
pub mod base58check;
pub mod bitcoin;
pub mod ergo;
pub mod evm;
pub mod generator;
pub mod handshake;
pub mod monero;

pub use generator::{AddressFormatter, HdWalletGenerator, WalletGenerator};

use crate::config::GeneratorConfig;
use crate::crypto::{CurveType, PathFamily};
use crate::error::{WalletError, WalletResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coin {
    Bitcoin,
    Litecoin,
    Dogecoin,
    Ripple,
    Ergo,
    Handshake,
    Ethereum,
    Avalanche,
    Algorand,
    Monero,
}

impl Coin {
    pub const ALL: [Coin; 10] = [
        Coin::Bitcoin,
        Coin::Litecoin,
        Coin::Dogecoin,
        Coin::Ripple,
        Coin::Ergo,
        Coin::Handshake,
        Coin::Ethereum,
        Coin::Avalanche,
        Coin::Algorand,
        Coin::Monero,
    ];

    pub fn ticker(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "BTC",
            Coin::Litecoin => "LTC",
            Coin::Dogecoin => "DOGE",
            Coin::Ripple => "XRP",
            Coin::Ergo => "ERG",
            Coin::Handshake => "HNS",
            Coin::Ethereum => "ETH",
            Coin::Avalanche => "AVAX",
            Coin::Algorand => "ALGO",
            Coin::Monero => "XMR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Litecoin => "litecoin",
            Coin::Dogecoin => "dogecoin",
            Coin::Ripple => "ripple",
            Coin::Ergo => "ergo",
            Coin::Handshake => "handshake",
            Coin::Ethereum => "ethereum",
            Coin::Avalanche => "avalanche",
            Coin::Algorand => "algorand",
            Coin::Monero => "monero",
        }
    }

    /// Path family the coin's generator expects positions in.
    pub fn family(&self) -> PathFamily {
        match self {
            Coin::Bitcoin
            | Coin::Litecoin
            | Coin::Dogecoin
            | Coin::Ripple
            | Coin::Ergo
            | Coin::Handshake => PathFamily::AccountChangeIndex,
            Coin::Ethereum | Coin::Avalanche => PathFamily::IndexOnly,
            Coin::Algorand | Coin::Monero => PathFamily::AccountOnly,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

impl FromStr for Coin {
    type Err = WalletError;

    /// Accepts the ticker or the lowercase name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coin::ALL
            .into_iter()
            .find(|c| c.ticker().eq_ignore_ascii_case(s) || c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| WalletError::parameter("coin", format!("unsupported coin '{}'", s)))
    }
}

impl Serialize for Coin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.ticker())
    }
}

/// Compiled-in constants for one coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinDescriptor {
    pub coin: Coin,
    pub purpose: u32,
    pub coin_type: u32,
    pub family: PathFamily,
    pub curve: CurveType,
}

/// Build the generator for `coin` over `seed`.
pub fn generator_for(
    coin: Coin,
    seed: &[u8],
    config: &GeneratorConfig,
) -> WalletResult<Box<dyn WalletGenerator>> {
    let output = config.key_output();

    let generator: Box<dyn WalletGenerator> = match coin {
        Coin::Bitcoin => Box::new(HdWalletGenerator::new(
            seed,
            output,
            bitcoin::SegwitFormatter::bitcoin(),
        )?),
        Coin::Litecoin => Box::new(HdWalletGenerator::new(
            seed,
            output,
            bitcoin::SegwitFormatter::litecoin(),
        )?),
        Coin::Handshake => Box::new(HdWalletGenerator::new(
            seed,
            output,
            handshake::handshake(),
        )?),
        Coin::Dogecoin => Box::new(HdWalletGenerator::new(
            seed,
            output,
            base58check::Base58CheckFormatter::dogecoin(),
        )?),
        Coin::Ripple => Box::new(HdWalletGenerator::new(
            seed,
            output,
            base58check::Base58CheckFormatter::ripple(),
        )?),
        Coin::Ergo => Box::new(HdWalletGenerator::new(
            seed,
            output,
            ergo::ErgoFormatter::new(),
        )?),
        Coin::Ethereum => Box::new(HdWalletGenerator::new(
            seed,
            output,
            evm::EthereumFormatter::new(),
        )?),
        Coin::Avalanche => Box::new(HdWalletGenerator::new(
            seed,
            output,
            avalanche::AvalancheFormatter::new(&config.avalanche_chains)?,
        )?),
        Coin::Algorand => Box::new(HdWalletGenerator::new(
            seed,
            output,
            algorand::AlgorandFormatter::new(),
        )?),
        Coin::Monero => Box::new(HdWalletGenerator::new(
            seed,
            output,
            monero::MoneroFormatter::new(),
        )?),
    };

    Ok(generator)
}
