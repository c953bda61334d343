/// Number of letters in the cipher alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// The cipher alphabet in canonical order.
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Most frequent English letter, used when no unigram table is available.
pub const FALLBACK_TOP_LETTER: u8 = b'E';

/// Index (0..26) of an ASCII letter of either case.
#[inline(always)]
pub fn index_of(byte: u8) -> Option<usize> {
    if byte.is_ascii_alphabetic() {
        Some((byte.to_ascii_uppercase() - b'A') as usize)
    } else {
        None
    }
}

/// Uppercase letter for an alphabet index.
#[inline(always)]
pub fn letter_at(idx: usize) -> u8 {
    ALPHABET[idx]
}

/// Encodes an n-gram of ASCII letters as a base-26 integer.
/// Returns `None` as soon as a non-letter is found.
#[inline(always)]
pub fn ngram_code(window: &[u8]) -> Option<usize> {
    let mut code = 0usize;
    for &b in window {
        code = code * ALPHABET_SIZE + index_of(b)?;
    }
    Some(code)
}

/// Number of distinct n-grams over the alphabet (26^n).
pub fn ngram_space(n: usize) -> usize {
    ALPHABET_SIZE.pow(n as u32)
}
