use crate::alphabet::{self, ALPHABET_SIZE};
use crate::detector::Override;
use crate::error::{CfResult, CipherError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A bijection from cipher letters to plaintext letters.
///
/// `images[c]` is the plaintext index for cipher index `c`. Every
/// constructor and every mutating method keeps the array a permutation
/// of `0..26`. The type is `Copy`: a copy is an independent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mapping {
    images: [u8; ALPHABET_SIZE],
}

impl Default for Mapping {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mapping {
    pub fn identity() -> Self {
        let mut images = [0u8; ALPHABET_SIZE];
        for (i, img) in images.iter_mut().enumerate() {
            *img = i as u8;
        }
        Self { images }
    }

    /// Builds a mapping from plaintext indices, rejecting anything that is
    /// not a permutation of the alphabet.
    pub fn from_images(images: [u8; ALPHABET_SIZE]) -> CfResult<Self> {
        let m = Self { images };
        if m.is_bijection() {
            Ok(m)
        } else {
            Err(CipherError::InvalidKey(
                "images are not a permutation of the alphabet".to_string(),
            ))
        }
    }

    #[inline(always)]
    pub fn images(&self) -> &[u8; ALPHABET_SIZE] {
        &self.images
    }

    /// Plaintext letter (uppercase) for a cipher letter of either case.
    #[inline(always)]
    pub fn image(&self, cipher: u8) -> Option<u8> {
        alphabet::index_of(cipher).map(|i| alphabet::letter_at(self.images[i] as usize))
    }

    /// Cipher index currently mapped onto `plain_idx`.
    #[inline(always)]
    pub fn preimage(&self, plain_idx: usize) -> usize {
        self.images
            .iter()
            .position(|&p| p as usize == plain_idx)
            .unwrap_or(plain_idx)
    }

    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; ALPHABET_SIZE];
        for &p in &self.images {
            let p = p as usize;
            if p >= ALPHABET_SIZE || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        true
    }

    /// Exchanges the images of two cipher indices.
    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.images.swap(a, b);
    }

    pub fn inverse(&self) -> Mapping {
        let mut images = [0u8; ALPHABET_SIZE];
        for (c, &p) in self.images.iter().enumerate() {
            images[p as usize] = c as u8;
        }
        Mapping { images }
    }

    /// Forces `cipher -> plain`. Whichever cipher letter held `plain` takes
    /// over the previous image of `cipher`, so the result stays a bijection.
    pub fn apply_override(&mut self, ov: &Override) {
        let (Some(c), Some(p)) = (alphabet::index_of(ov.cipher), alphabet::index_of(ov.plain))
        else {
            return;
        };
        let holder = self.preimage(p);
        if holder != c {
            self.swap(c, holder);
        }
        debug_assert!(self.is_bijection());
    }

    /// Applies the key to `text`. Letters keep their case, everything else
    /// is copied through at the same position.
    pub fn decrypt(&self, text: &str) -> String {
        text.chars()
            .map(|ch| {
                if !ch.is_ascii_alphabetic() {
                    return ch;
                }
                let idx = (ch.to_ascii_uppercase() as u8 - b'A') as usize;
                let plain = alphabet::letter_at(self.images[idx] as usize) as char;
                if ch.is_ascii_lowercase() {
                    plain.to_ascii_lowercase()
                } else {
                    plain
                }
            })
            .collect()
    }

    /// Produces the cipher text that this mapping decrypts back to `plaintext`.
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.inverse().decrypt(plaintext)
    }

    /// (cipher letter, plaintext letter) pairs in alphabet order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.images.iter().enumerate().map(|(c, &p)| {
            (
                alphabet::letter_at(c) as char,
                alphabet::letter_at(p as usize) as char,
            )
        })
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &p in &self.images {
            write!(f, "{}", alphabet::letter_at(p as usize) as char)?;
        }
        Ok(())
    }
}

impl FromStr for Mapping {
    type Err = CipherError;

    /// Parses a 26-letter key: the i-th letter is the plaintext image of the
    /// i-th cipher letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bytes = s.as_bytes();
        if bytes.len() != ALPHABET_SIZE {
            return Err(CipherError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_SIZE,
                s.chars().count()
            )));
        }
        let mut images = [0u8; ALPHABET_SIZE];
        for (i, &b) in bytes.iter().enumerate() {
            images[i] = alphabet::index_of(b).ok_or_else(|| {
                CipherError::InvalidKey(format!("'{}' is not a letter", b as char))
            })? as u8;
        }
        Mapping::from_images(images)
            .map_err(|_| CipherError::InvalidKey(format!("'{}' repeats a letter", s)))
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
