// wallet-core/src/encoding/bits.rs
//
// 8-bit → 5-bit repacking for base32-style alphabets.

/// Input bytes consumed per group of eight 5-bit values.
const BYTES_PER_BLOCK: usize = 5;
const GROUPS_PER_BLOCK: usize = 8;

/// RFC 4648 base32 table (A–Z, 2–7).
pub const BASE32_TABLE: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Repack `input` into 5-bit groups, one value in `0..32` per output byte.
///
/// The input is padded with trailing zero bytes up to a multiple of 5, so
/// `n` bytes always give `ceil(n / 5) * 8` groups.
pub fn to_5bit_groups(input: &[u8]) -> Vec<u8> {
    let blocks = input.len().div_ceil(BYTES_PER_BLOCK);
    let mut groups = Vec::with_capacity(blocks * GROUPS_PER_BLOCK);

    for chunk in input.chunks(BYTES_PER_BLOCK) {
        let mut block = [0u8; BYTES_PER_BLOCK];
        block[..chunk.len()].copy_from_slice(chunk);

        let acc = block.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64);
        for shift in (0..GROUPS_PER_BLOCK).rev() {
            groups.push(((acc >> (shift * 5)) & 0x1F) as u8);
        }
    }
    groups
}

/// Map each 5-bit group through a 32-symbol table.
pub fn map_groups(groups: &[u8], table: &[u8; 32]) -> String {
    groups
        .iter()
        .map(|&g| table[(g & 0x1F) as usize] as char)
        .collect()
}
