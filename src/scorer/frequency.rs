use crate::alphabet;
use std::collections::HashMap;

/// N-gram -> percentage of qualifying windows, in first-seen order.
pub type Distribution = Vec<(String, f64)>;

/// Frequency profile of every length-`n` window made only of letters.
///
/// Windows that touch a space, digit or punctuation are not counted. The
/// result is empty when there is no qualifying window (or `n == 0`).
pub fn compute_frequency(text: &str, n: usize) -> Distribution {
    if n == 0 {
        return Vec::new();
    }
    let upper = text.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    if bytes.len() < n {
        return Vec::new();
    }

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<&[u8], usize> = HashMap::new();
    let mut total = 0usize;

    for window in bytes.windows(n) {
        if !window.iter().all(u8::is_ascii_uppercase) {
            continue;
        }
        total += 1;
        match slots.get(window) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(window, counts.len());
                // Window is pure ASCII, so this never loses data.
                counts.push((String::from_utf8_lossy(window).into_owned(), 1));
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    counts
        .into_iter()
        .map(|(gram, count)| (gram, count as f64 / total as f64 * 100.0))
        .collect()
}

/// Pairs observed letters with reference letters by frequency rank.
///
/// Both sides are sorted descending with a stable sort, so ties keep their
/// input order. Only single-letter entries take part. The output is a
/// partial (cipher, plain) assignment and is not guaranteed to be a
/// bijection.
pub fn rank_match(observed: &[(String, f64)], reference: &[(String, f64)]) -> Vec<(u8, u8)> {
    let ranked = |dist: &[(String, f64)]| -> Vec<(u8, f64)> {
        let mut letters: Vec<(u8, f64)> = dist
            .iter()
            .filter(|(g, _)| g.len() == 1 && g.as_bytes()[0].is_ascii_alphabetic())
            .map(|(g, f)| (g.as_bytes()[0].to_ascii_uppercase(), *f))
            .collect();
        letters.sort_by(|a, b| b.1.total_cmp(&a.1));
        letters
    };

    ranked(observed)
        .into_iter()
        .zip(ranked(reference))
        .map(|((c, _), (p, _))| (c, p))
        .collect()
}

/// `Σ reference[g] × observed%[g]` over every n-gram of `text`, computed
/// in one pass over the windows without building the distribution.
///
/// `dense` is indexed by base-26 n-gram code (see `FrequencyTable::dense`).
#[inline]
pub fn weighted_ngram_sum(text: &[u8], n: usize, dense: &[f64]) -> f64 {
    if n == 0 || text.len() < n {
        return 0.0;
    }
    let mut total = 0usize;
    let mut acc = 0.0;
    for window in text.windows(n) {
        if let Some(code) = alphabet::ngram_code(window) {
            total += 1;
            acc += dense[code];
        }
    }
    if total == 0 {
        0.0
    } else {
        acc * 100.0 / total as f64
    }
}
