// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].
//! - **Ethereum generator**: index-only BIP-44 paths via [`EthereumFormatter`].
//!
//! Avalanche C-Chain reuses [`EvmAddress`] for its EVM ledger.

pub mod address;
pub mod ethereum;

// Re-exports for cleaner API access
pub use address::EvmAddress;
pub use ethereum::EthereumFormatter;
