//! Tournament selection.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::genotype::Genotype;
use rand::Rng;

/// Tournament selection: draws `tournament_size` uniform samples **with
/// replacement** and returns the index of the sample with the lowest
/// fitness.
///
/// Higher `tournament_size` = stronger selection pressure toward the
/// fittest individuals; size 1 degenerates to uniform random selection.
/// A size below 1 is treated as 1.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Genotype], tournament_size: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");

    let n = population.len();
    let mut best_index = rng.random_range(0..n);
    for _ in 1..tournament_size.max(1) {
        let index = rng.random_range(0..n);
        if population[index].fitness() < population[best_index].fitness() {
            best_index = index;
        }
    }
    best_index
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Vec<Genotype> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut g = Genotype::zeroed(1);
                g.set_fitness(f);
                g
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // Index 2 (fitness 1.0) should dominate.
        assert!(
            counts[2] > 6000,
            "expected best selected >60% of the time, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_tournament_larger_than_population() {
        let pop = make_population(&[3.0, 1.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(7);

        // Sampling is with replacement, so oversized tournaments are legal
        // and all but certain to contain the best individual.
        let mut hits = 0;
        for _ in 0..1000 {
            if tournament(&pop, 64, &mut rng) == 1 {
                hits += 1;
            }
        }
        assert!(hits > 990, "expected near-certain best pick, got {hits}/1000");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Genotype> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        tournament(&pop, 3, &mut rng);
    }
}
