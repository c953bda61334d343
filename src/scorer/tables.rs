use crate::alphabet;
use std::collections::HashMap;

/// Reference n-gram frequencies (percentages) for one n-gram length.
///
/// Entries keep insertion order; rank-based heuristics break ties with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    n: usize,
    entries: Vec<(String, f64)>,
    /// Position of each n-gram in `entries`.
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn from_entries<'a, I>(n: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut table = Self::new(n);
        for (gram, freq) in entries {
            table.insert(gram, freq);
        }
        table
    }

    /// Inserts or replaces an entry. Returns `false` (and stores nothing)
    /// when the n-gram has the wrong length or contains non-letters.
    pub fn insert(&mut self, ngram: &str, freq: f64) -> bool {
        let gram = ngram.trim().to_ascii_uppercase();
        if gram.len() != self.n || alphabet::ngram_code(gram.as_bytes()).is_none() {
            return false;
        }
        if !freq.is_finite() || freq < 0.0 {
            return false;
        }
        match self.index.get(&gram) {
            Some(&slot) => self.entries[slot].1 = freq,
            None => {
                self.index.insert(gram.clone(), self.entries.len());
                self.entries.push((gram, freq));
            }
        }
        true
    }

    pub fn get(&self, ngram: &str) -> Option<f64> {
        let slot = self.index.get(&ngram.trim().to_ascii_uppercase())?;
        Some(self.entries[*slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Most frequent entry; the earliest one wins a tie.
    pub fn top(&self) -> Option<&(String, f64)> {
        self.entries
            .iter()
            .fold(None, |best: Option<&(String, f64)>, e| match best {
                Some(b) if b.1 >= e.1 => Some(b),
                _ => Some(e),
            })
    }

    /// Flattened lookup indexed by base-26 n-gram code. Missing n-grams are 0.
    pub fn dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; alphabet::ngram_space(self.n)];
        for (gram, freq) in &self.entries {
            if let Some(code) = alphabet::ngram_code(gram.as_bytes()) {
                dense[code] = *freq;
            }
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_normalizes_and_filters() {
        let mut t = FrequencyTable::new(2);
        assert!(t.insert("th", 1.52));
        assert!(!t.insert("THE", 1.81));
        assert!(!t.insert("T1", 0.5));
        assert!(!t.insert("HE", -1.0));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("TH"), Some(1.52));
    }

    #[test]
    fn test_duplicate_replaces_in_place() {
        let t = FrequencyTable::from_entries(1, [("A", 1.0), ("B", 2.0), ("a", 3.0)]);
        assert_eq!(t.entries()[0], ("A".to_string(), 3.0));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_full_trigram_table_keeps_order_and_replaces() {
        let letters = b'A'..=b'Z';
        let grams: Vec<String> = letters
            .clone()
            .flat_map(|a| {
                letters.clone().flat_map(move |b| {
                    (b'A'..=b'Z').map(move |c| String::from_utf8(vec![a, b, c]).unwrap())
                })
            })
            .collect();

        let mut t = FrequencyTable::new(3);
        for (i, g) in grams.iter().enumerate() {
            assert!(t.insert(g, i as f64));
        }
        assert_eq!(t.len(), 26 * 26 * 26);
        assert_eq!(t.get("zzz"), Some(17575.0));

        assert!(t.insert("the", 0.5));
        assert_eq!(t.len(), 26 * 26 * 26);
        assert_eq!(t.get("THE"), Some(0.5));
        let code = alphabet::ngram_code(b"THE").unwrap();
        assert_eq!(t.entries()[code].0, "THE");
        assert_eq!(t.dense()[code], 0.5);
    }

    #[test]
    fn test_top_prefers_first_on_tie() {
        let t = FrequencyTable::from_entries(1, [("X", 5.0), ("Y", 5.0), ("Z", 1.0)]);
        assert_eq!(t.top().unwrap().0, "X");
    }

    #[test]
    fn test_dense_lookup() {
        let t = FrequencyTable::from_entries(2, [("AB", 0.7)]);
        let dense = t.dense();
        assert_eq!(dense.len(), 26 * 26);
        assert_eq!(dense[1], 0.7);
        assert_eq!(dense[0], 0.0);
    }
}
