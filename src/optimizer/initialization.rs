use super::mutation::generate_random;
use crate::detector::Override;
use crate::mapping::Mapping;
use crate::scorer::frequency::{compute_frequency, rank_match};
use crate::scorer::FrequencyTable;
use fastrand::Rng;

/// Warm start: pairs cipher letters with reference letters by frequency
/// rank, and fills letters the ranking leaves out at random.
pub fn generate_frequency_seeded(
    rng: &mut Rng,
    cipher_text: &str,
    unigrams: &FrequencyTable,
) -> Mapping {
    let observed = compute_frequency(cipher_text, 1);
    let pairs = rank_match(&observed, unigrams.entries());

    let mut mapping = generate_random(rng);
    // Ranked letters are distinct on both sides, so a later override never
    // displaces an earlier one.
    for (cipher, plain) in pairs {
        mapping.apply_override(&Override { cipher, plain });
    }
    mapping
}
