use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter, EnumString};

/// How whitespace-separated tokens are matched against the dictionary.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Tokenization {
    /// Token is looked up verbatim (lowercased); trailing punctuation counts
    /// against the match.
    #[default]
    Strict,
    /// Leading and trailing non-alphanumeric characters are stripped first.
    Lenient,
}

/// Set of valid lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        let w = word.trim();
        if w.is_empty() {
            return false;
        }
        self.words.insert(w.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `(valid_words, total_tokens)` for `text`.
    pub fn count_valid(&self, text: &str, mode: Tokenization) -> (usize, usize) {
        let mut valid = 0;
        let mut total = 0;
        for token in text.split_whitespace() {
            total += 1;
            let token = match mode {
                Tokenization::Strict => token,
                Tokenization::Lenient => token.trim_matches(|c: char| !c.is_alphanumeric()),
            };
            if token.is_empty() {
                continue;
            }
            if self.words.contains(&token.to_lowercase()) {
                valid += 1;
            }
        }
        (valid, total)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for w in iter {
            dict.insert(w.as_ref());
        }
        dict
    }
}
