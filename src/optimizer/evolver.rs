use super::evaluator::Candidate;
use super::mutation::mutated;
use crate::mapping::Mapping;
use fastrand::Rng;

/// Truncation selection with elitism: the top `elite_size` keys survive
/// untouched and every other slot is a single-swap child of an elite.
#[derive(Debug, Clone, Copy)]
pub struct PopulationEvolver {
    pub population_size: usize,
    pub elite_size: usize,
}

impl PopulationEvolver {
    pub fn new(population_size: usize, elite_size: usize) -> Self {
        Self {
            population_size,
            elite_size,
        }
    }

    /// Sorts by descending score. The sort is stable, so equal scores keep
    /// their population order.
    pub fn rank(mut scored: Vec<Candidate>) -> Vec<Candidate> {
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Builds the next population from a ranked one.
    pub fn next_generation(&self, ranked: &[Candidate], rng: &mut Rng) -> Vec<Mapping> {
        let elite_count = self.elite_size.min(ranked.len());
        let elites = &ranked[..elite_count];

        let mut next = Vec::with_capacity(self.population_size);
        next.extend(elites.iter().map(|c| c.mapping));

        if elites.is_empty() {
            return next;
        }
        while next.len() < self.population_size {
            let parent = &elites[rng.usize(0..elites.len())].mapping;
            next.push(mutated(parent, rng));
        }
        next
    }
}
