// wallet-core/src/encoding/base58.rs
//
// Base58, alphabet-parameterized
//
// Dùng cho: Bitcoin-family base58Check, Ripple, Avalanche CB58, Ergo, Monero
// Algorithm: schoolbook long division base-256 → base-58, O(n²)
//
// Mỗi lời gọi làm việc trên một bản copy riêng của input, nên hàm an toàn khi
// gọi song song từ nhiều thread.

use crate::error::{WalletError, WalletResult};

/// 58-symbol table plus its reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 58],
    digits: [u8; 128],
}

const NO_DIGIT: u8 = 0xFF;

impl Alphabet {
    pub const BITCOIN: Alphabet =
        Alphabet::new(*b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

    pub const RIPPLE: Alphabet =
        Alphabet::new(*b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

    /// Builds the reverse table at compile time. Symbols must be ASCII.
    pub const fn new(symbols: [u8; 58]) -> Self {
        let mut digits = [NO_DIGIT; 128];
        let mut i = 0;
        while i < symbols.len() {
            digits[symbols[i] as usize] = i as u8;
            i += 1;
        }
        Alphabet { symbols, digits }
    }

    /// The symbol standing for digit zero (and for each leading zero byte).
    #[inline]
    pub fn zero(&self) -> char {
        self.symbols[0] as char
    }

    #[inline]
    fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    #[inline]
    fn digit(&self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        match self.digits[c as usize] {
            NO_DIGIT => None,
            d => Some(d),
        }
    }
}

// =============================================================================
// ENCODE / DECODE
// =============================================================================

/// Encode `input` with `alphabet`.
///
/// Every leading zero byte becomes exactly one `alphabet.zero()` character.
/// Empty input gives an empty string.
pub fn encode(input: &[u8], alphabet: &Alphabet) -> String {
    if input.is_empty() {
        return String::new();
    }

    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // Owned working copy, divided in place by 58 on every pass
    let mut number = input.to_vec();
    let mut encoded = vec![0u8; input.len() * 2];
    let mut output_start = encoded.len();

    let mut input_start = zeros;
    while input_start < number.len() {
        output_start -= 1;
        encoded[output_start] = alphabet.symbol(divmod(&mut number, input_start, 256, 58));
        if number[input_start] == 0 {
            input_start += 1;
        }
    }

    let zero = alphabet.symbol(0);
    while output_start < encoded.len() && encoded[output_start] == zero {
        output_start += 1;
    }
    for _ in 0..zeros {
        output_start -= 1;
        encoded[output_start] = zero;
    }

    encoded[output_start..].iter().map(|&b| b as char).collect()
}

/// Inverse of [`encode`]. Fails on any character outside `alphabet`.
pub fn decode(input: &str, alphabet: &Alphabet) -> WalletResult<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut input58 = Vec::with_capacity(input.len());
    for (position, c) in input.chars().enumerate() {
        let digit = alphabet.digit(c).ok_or_else(|| {
            WalletError::Decoding(format!(
                "invalid base58 character '{}' at position {}",
                c, position
            ))
        })?;
        input58.push(digit);
    }

    let zeros = input58.iter().take_while(|&&d| d == 0).count();

    let mut decoded = vec![0u8; input58.len()];
    let mut output_start = decoded.len();

    let mut input_start = zeros;
    while input_start < input58.len() {
        output_start -= 1;
        decoded[output_start] = divmod(&mut input58, input_start, 58, 256);
        if input58[input_start] == 0 {
            input_start += 1;
        }
    }

    while output_start < decoded.len() && decoded[output_start] == 0 {
        output_start += 1;
    }

    let mut result = vec![0u8; zeros];
    result.extend_from_slice(&decoded[output_start..]);
    Ok(result)
}

/// Divides the big number in `number[first_digit..]` (digits in `base`) by
/// `divisor` in place and returns the remainder.
fn divmod(number: &mut [u8], first_digit: usize, base: u32, divisor: u32) -> u8 {
    let mut remainder = 0u32;
    for digit in number.iter_mut().skip(first_digit) {
        let temp = remainder * base + *digit as u32;
        *digit = (temp / divisor) as u8;
        remainder = temp % divisor;
    }
    remainder as u8
}

// =============================================================================
// CHUNKED (fixed-width) VARIANT
// =============================================================================

/// Input bytes per chunk.
pub const CHUNK_BYTES: usize = 8;

/// Encoded width for a chunk of `n` bytes, `n` in 0..=8.
const CHUNK_WIDTHS: [usize; CHUNK_BYTES + 1] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

/// Width of a full 8-byte chunk.
pub const FULL_CHUNK_WIDTH: usize = CHUNK_WIDTHS[CHUNK_BYTES];

/// Fixed-width base58 over 8-byte chunks, Bitcoin alphabet.
///
/// Each chunk is encoded on its own and left-padded with `'1'` so its width
/// never depends on the value: 11 characters for a full chunk, 7 for the
/// 5-byte tail of a 69-byte Monero address.
pub fn encode_chunked(input: &[u8]) -> String {
    let alphabet = &Alphabet::BITCOIN;
    let full_chunks = input.len() / CHUNK_BYTES;
    let tail = input.len() % CHUNK_BYTES;

    let mut out = String::with_capacity(full_chunks * FULL_CHUNK_WIDTH + CHUNK_WIDTHS[tail]);
    for chunk in input.chunks(CHUNK_BYTES) {
        let width = CHUNK_WIDTHS[chunk.len()];
        let encoded = encode(chunk, alphabet);
        for _ in encoded.len()..width {
            out.push(alphabet.zero());
        }
        out.push_str(&encoded);
    }
    out
}

/// Inverse of [`encode_chunked`].
///
/// Every full 11-character block must hold at most 8 bytes. A short final
/// block must have one of the widths the encoder produces.
pub fn decode_chunked(input: &str) -> WalletResult<Vec<u8>> {
    if !input.is_ascii() {
        return Err(WalletError::Decoding(
            "chunked base58 must be ASCII".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(input.len() / FULL_CHUNK_WIDTH * CHUNK_BYTES + CHUNK_BYTES);
    for (n, block) in input.as_bytes().chunks(FULL_CHUNK_WIDTH).enumerate() {
        let byte_len = CHUNK_WIDTHS
            .iter()
            .position(|&w| w == block.len())
            .ok_or_else(|| {
                WalletError::Decoding(format!(
                    "chunk {} has width {}, not a valid chunk width",
                    n,
                    block.len()
                ))
            })?;

        // ASCII checked above
        let text: String = block.iter().map(|&b| b as char).collect();
        let decoded = decode(&text, &Alphabet::BITCOIN)?;
        let value = &decoded[decoded.iter().take_while(|&&b| b == 0).count()..];
        if value.len() > byte_len {
            return Err(WalletError::Decoding(format!(
                "chunk {} overflows {} bytes",
                n, byte_len
            )));
        }

        out.resize(out.len() + byte_len - value.len(), 0);
        out.extend_from_slice(value);
    }
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================
