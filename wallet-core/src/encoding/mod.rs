// wallet-core/src/encoding/mod.rs

//! Binary-to-text codecs shared by every coin
//!
//! - **Base58**: alphabet-parameterized encode/decode plus the fixed-width
//!   chunked variant, via [`base58`].
//! - **5-bit repacking**: [`to_5bit_groups`] for base32-style alphabets.
//! - **Bytes**: uppercase hex and fixed-width integer serialization.

pub mod base58;
pub mod bits;
pub mod bytes;

pub use base58::Alphabet;
pub use bits::{map_groups, to_5bit_groups, BASE32_TABLE};
pub use bytes::{be_u32, hex_upper, le_u32};
