use crate::alphabet::ALPHABET_SIZE;
use crate::mapping::Mapping;
use fastrand::Rng;

/// Uniformly random key (Fisher-Yates over the identity permutation).
pub fn generate_random(rng: &mut Rng) -> Mapping {
    let mut mapping = Mapping::identity();
    for i in (1..ALPHABET_SIZE).rev() {
        let j = rng.usize(0..=i);
        mapping.swap(i, j);
    }
    mapping
}

/// Swaps the images of two distinct, uniformly chosen cipher letters.
#[inline(always)]
pub fn mutate(mapping: &mut Mapping, rng: &mut Rng) {
    let a = rng.usize(0..ALPHABET_SIZE);
    let mut b = rng.usize(0..ALPHABET_SIZE - 1);
    if b >= a {
        b += 1;
    }
    mapping.swap(a, b);
    debug_assert!(mapping.is_bijection());
}

/// Returns a mutated copy, leaving `parent` untouched.
#[inline(always)]
pub fn mutated(parent: &Mapping, rng: &mut Rng) -> Mapping {
    let mut child = *parent;
    mutate(&mut child, rng);
    child
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_keys_are_bijections() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..200 {
            assert!(generate_random(&mut rng).is_bijection());
        }
    }

    #[test]
    fn test_mutation_changes_exactly_two_letters() {
        let mut rng = Rng::with_seed(11);
        let parent = generate_random(&mut rng);
        for _ in 0..100 {
            let child = mutated(&parent, &mut rng);
            let diff = parent
                .images()
                .iter()
                .zip(child.images())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(diff, 2);
            assert!(child.is_bijection());
        }
    }

    #[test]
    fn test_mutated_leaves_parent_alone() {
        let mut rng = Rng::with_seed(3);
        let parent = Mapping::identity();
        let _child = mutated(&parent, &mut rng);
        assert_eq!(parent, Mapping::identity());
    }
}
