use crate::alphabet::ALPHABET_SIZE;
use crate::scorer::frequency::compute_frequency;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A forced single-letter assignment: `cipher` decrypts to `plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub cipher: u8,
    pub plain: u8,
}

/// Flags a cipher letter that dominates the text so strongly that it is
/// assumed to encrypt the most frequent plaintext letter.
///
/// Returns `None` when fewer than 26 distinct letters occur (not enough
/// evidence) or when the top letter's share of all letters does not exceed
/// `threshold`.
pub fn detect(cipher_text: &str, threshold: f64, target: u8) -> Option<Override> {
    let freq = compute_frequency(cipher_text, 1);
    if freq.len() < ALPHABET_SIZE {
        trace!(
            "Detector: only {} distinct letters, no override",
            freq.len()
        );
        return None;
    }

    let mass: f64 = freq.iter().map(|(_, f)| f).sum();
    let (top, top_freq) = freq
        .iter()
        .fold(None, |best: Option<&(String, f64)>, e| match best {
            Some(b) if b.1 >= e.1 => Some(b),
            _ => Some(e),
        })
        .map(|(g, f)| (g.as_bytes()[0], *f))?;

    if mass > 0.0 && top_freq / mass > threshold {
        Some(Override {
            cipher: top,
            plain: target.to_ascii_uppercase(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skewed_text() -> String {
        // 234 of 260 letters are 'X' (90%), every letter present.
        let mut s = "X".repeat(234);
        s.push_str("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        s
    }

    #[test]
    fn test_fires_on_skewed_text() {
        let ov = detect(&skewed_text(), 0.5, b'E').expect("override expected");
        assert_eq!(ov, Override { cipher: b'X', plain: b'E' });
    }

    #[test]
    fn test_needs_full_alphabet() {
        assert_eq!(detect("XXXXXXXXXXAB", 0.5, b'E'), None);
        assert_eq!(detect("", 0.5, b'E'), None);
    }

    #[test]
    fn test_threshold_not_exceeded() {
        assert_eq!(detect("the quick brown fox jumps over the lazy dog", 0.5, b'E'), None);
        assert_eq!(detect(&skewed_text(), 0.95, b'E'), None);
    }
}
