// wallet-core/src/encoding/bytes.rs

/// Uppercase hex, two characters per byte, no separator.
pub fn hex_upper(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// 32-bit big-endian serialization (extended key child numbers, versions).
#[inline]
pub fn be_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// 32-bit little-endian serialization.
#[inline]
pub fn le_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}
