use super::mutation::mutate;
use crate::mapping::Mapping;
use crate::scorer::Scorer;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// A perturbed copy of the best key and what it decrypts to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternate {
    pub variant: usize,
    pub mapping: Mapping,
    pub plaintext: String,
    pub score: f64,
}

/// Shows how fragile the best key is: `variants` independent copies, each
/// swapped `depth` times. The input key is never modified.
pub fn alternate_decryptions(
    best: &Mapping,
    cipher_text: &str,
    variants: usize,
    depth: usize,
    scorer: &Scorer,
    rng: &mut Rng,
) -> Vec<Alternate> {
    (1..=variants)
        .map(|variant| {
            let mut mapping = *best;
            for _ in 0..depth {
                mutate(&mut mapping, rng);
            }
            let plaintext = mapping.decrypt(cipher_text);
            let score = scorer.score(&plaintext);
            Alternate {
                variant,
                mapping,
                plaintext,
                score,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringParams;
    use crate::scorer::ReferenceData;
    use std::sync::Arc;

    #[test]
    fn test_variants_are_independent_bijections() {
        let scorer = Scorer::new(Arc::new(ReferenceData::english()), &ScoringParams::default());
        let best = Mapping::identity();
        let mut rng = Rng::with_seed(4);

        let alts = alternate_decryptions(&best, "hello there", 3, 3, &scorer, &mut rng);
        assert_eq!(alts.len(), 3);
        assert_eq!(best, Mapping::identity());
        for (i, a) in alts.iter().enumerate() {
            assert_eq!(a.variant, i + 1);
            assert!(a.mapping.is_bijection());
            assert_eq!(a.plaintext, a.mapping.decrypt("hello there"));
            assert_eq!(a.score, scorer.score(&a.plaintext));
        }
    }

    #[test]
    fn test_zero_variants() {
        let scorer = Scorer::new(Arc::new(ReferenceData::english()), &ScoringParams::default());
        let alts = alternate_decryptions(&Mapping::identity(), "abc", 0, 3, &scorer, &mut Rng::with_seed(1));
        assert!(alts.is_empty());
    }
}
