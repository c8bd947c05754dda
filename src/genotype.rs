//! Binary solution encoding.
//!
//! A [`Genotype`] stores one `u32` word per decision variable, giving a
//! fixed bit length of `32 * dimensionality`. Genetic operators work at
//! the bit level; decoding maps each word linearly into a [`Domain`].
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning* (binary encodings, ch. 3)

use crate::error::GaError;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The continuous interval each decision variable decodes into.
///
/// Decoding is an exact-endpoint linear map: an all-zero word decodes to
/// `min`, an all-ones word to `max`.
///
/// ```
/// use evobit::Domain;
///
/// let domain = Domain::new(-100.0, 100.0);
/// assert_eq!(domain.map(0), -100.0);
/// assert_eq!(domain.map(u32::MAX), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Domain {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Domain {
    /// Creates a domain with the given bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps a raw 32-bit word into the domain.
    pub fn map(&self, raw: u32) -> f64 {
        self.min + raw as f64 * (self.max - self.min) / u32::MAX as f64
    }
}

impl Default for Domain {
    /// The `[-100, 100]` interval.
    fn default() -> Self {
        Self {
            min: -100.0,
            max: 100.0,
        }
    }
}

/// A candidate solution: a fixed-length bit vector with a cached fitness.
///
/// The bit length is `32 * dimensionality` and never changes after
/// construction; crossover and mutation preserve it. `Clone` is a deep
/// copy — a cloned genotype shares no storage with the original.
///
/// The cached fitness is [`f64::INFINITY`] until the genotype has been
/// evaluated by a ranking pass, and is reset to [`f64::INFINITY`] by
/// [`mutate`](Genotype::mutate) since the genes it was computed from no
/// longer exist.
#[derive(Debug, Clone)]
pub struct Genotype {
    genes: Vec<u32>,
    fitness: f64,
}

impl Genotype {
    /// Creates a genotype with every word drawn as one uniform `u32` block.
    pub fn random<R: Rng>(dimensionality: usize, rng: &mut R) -> Self {
        let genes = (0..dimensionality).map(|_| rng.random::<u32>()).collect();
        Self {
            genes,
            fitness: f64::INFINITY,
        }
    }

    /// Creates an all-zero genotype, used as a crossover-child scaffold.
    pub fn zeroed(dimensionality: usize) -> Self {
        Self {
            genes: vec![0; dimensionality],
            fitness: f64::INFINITY,
        }
    }

    /// Number of decision variables.
    pub fn dimensionality(&self) -> usize {
        self.genes.len()
    }

    /// Total number of bits.
    pub fn bit_len(&self) -> usize {
        self.genes.len() * 32
    }

    /// The raw gene words, one per decision variable.
    pub fn genes(&self) -> &[u32] {
        &self.genes
    }

    /// The cached fitness; [`f64::INFINITY`] when not yet evaluated.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    /// Decodes the genes into one point of the domain.
    ///
    /// Pure and deterministic; the returned vector has
    /// [`dimensionality`](Genotype::dimensionality) entries.
    pub fn decode(&self, domain: &Domain) -> Vec<f64> {
        self.genes.iter().map(|&word| domain.map(word)).collect()
    }

    fn bit(&self, index: usize) -> bool {
        self.genes[index / 32] >> (index % 32) & 1 == 1
    }

    fn set_bit(&mut self, index: usize, value: bool) {
        let mask = 1u32 << (index % 32);
        if value {
            self.genes[index / 32] |= mask;
        } else {
            self.genes[index / 32] &= !mask;
        }
    }

    /// Uniform mask crossover: produces two children from two parents.
    ///
    /// For each bit position one uniform real is drawn; below
    /// `crossover_rate` the first child inherits `self`'s bit and the
    /// second child `other`'s, otherwise the assignment is swapped. At
    /// every position the two children hold exactly the two parents' bits
    /// between them.
    ///
    /// # Errors
    ///
    /// [`GaError::LengthMismatch`] if the parents' bit lengths differ.
    pub fn crossover<R: Rng>(
        &self,
        other: &Genotype,
        crossover_rate: f64,
        rng: &mut R,
    ) -> Result<(Genotype, Genotype), GaError> {
        if self.genes.len() != other.genes.len() {
            return Err(GaError::LengthMismatch {
                left: self.bit_len(),
                right: other.bit_len(),
            });
        }

        let mut child1 = Genotype::zeroed(self.dimensionality());
        let mut child2 = Genotype::zeroed(self.dimensionality());
        for index in 0..self.bit_len() {
            if rng.random_range(0.0..1.0) < crossover_rate {
                child1.set_bit(index, self.bit(index));
                child2.set_bit(index, other.bit(index));
            } else {
                child1.set_bit(index, other.bit(index));
                child2.set_bit(index, self.bit(index));
            }
        }
        Ok((child1, child2))
    }

    /// Flips each bit independently with probability `mutation_rate`.
    ///
    /// Invalidates the cached fitness.
    pub fn mutate<R: Rng>(&mut self, mutation_rate: f64, rng: &mut R) {
        for index in 0..self.bit_len() {
            if rng.random_range(0.0..1.0) < mutation_rate {
                self.genes[index / 32] ^= 1 << (index % 32);
            }
        }
        self.fitness = f64::INFINITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    impl Genotype {
        fn from_words(genes: Vec<u32>) -> Self {
            Self {
                genes,
                fitness: f64::INFINITY,
            }
        }
    }

    #[test]
    fn test_random_has_configured_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Genotype::random(3, &mut rng);
        assert_eq!(g.dimensionality(), 3);
        assert_eq!(g.bit_len(), 96);
        assert_eq!(g.fitness(), f64::INFINITY);
    }

    #[test]
    fn test_decode_endpoints() {
        let domain = Domain::default();
        let zeros = Genotype::zeroed(2);
        assert_eq!(zeros.decode(&domain), vec![-100.0, -100.0]);

        let ones = Genotype::from_words(vec![u32::MAX, u32::MAX]);
        assert_eq!(ones.decode(&domain), vec![100.0, 100.0]);
    }

    #[test]
    fn test_decode_is_monotonic_in_raw_value() {
        let domain = Domain::new(0.0, 1.0);
        let mut previous = f64::NEG_INFINITY;
        for raw in [0, 1, 1 << 16, 1 << 31, u32::MAX - 1, u32::MAX] {
            let mapped = domain.map(raw);
            assert!(mapped > previous, "map must be strictly increasing");
            assert!((0.0..=1.0).contains(&mapped));
            previous = mapped;
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut original = Genotype::random(4, &mut rng);
        let copy = original.clone();
        original.mutate(0.9, &mut rng);
        assert_ne!(copy.genes(), original.genes(), "mutation must not reach the copy");
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Genotype::zeroed(2);
        let b = Genotype::zeroed(3);
        let err = a.crossover(&b, 0.5, &mut rng).unwrap_err();
        assert_eq!(err, GaError::LengthMismatch { left: 64, right: 96 });
    }

    #[test]
    fn test_crossover_children_partition_parent_bits() {
        let mut rng = StdRng::seed_from_u64(99);
        let p1 = Genotype::from_words(vec![0xFFFF_FFFF, 0x0000_0000]);
        let p2 = Genotype::from_words(vec![0x0000_0000, 0xFFFF_FFFF]);

        let (c1, c2) = p1.crossover(&p2, 0.5, &mut rng).unwrap();
        assert_eq!(c1.bit_len(), p1.bit_len());
        assert_eq!(c2.bit_len(), p1.bit_len());
        for (i, (&w1, &w2)) in c1.genes().iter().zip(c2.genes()).enumerate() {
            // Parents are bitwise complements, so the children must be too.
            assert_eq!(w1, !w2, "word {i}: children must split complementary parents");
        }
    }

    #[test]
    fn test_mutation_flip_fraction_approaches_rate() {
        let mut rng = StdRng::seed_from_u64(2024);
        let rate = 0.05;
        let original = Genotype::random(2000, &mut rng);
        let mut mutated = original.clone();
        mutated.mutate(rate, &mut rng);

        let flipped: u32 = original
            .genes()
            .iter()
            .zip(mutated.genes())
            .map(|(&a, &b)| (a ^ b).count_ones())
            .sum();
        let fraction = flipped as f64 / original.bit_len() as f64;
        assert!(
            (fraction - rate).abs() < 0.01,
            "expected flip fraction near {rate}, got {fraction}"
        );
    }

    #[test]
    fn test_mutation_invalidates_fitness() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut g = Genotype::random(2, &mut rng);
        g.set_fitness(1.25);
        assert_eq!(g.fitness(), 1.25);
        g.mutate(0.1, &mut rng);
        assert_eq!(g.fitness(), f64::INFINITY);
    }

    proptest! {
        #[test]
        fn prop_crossover_every_child_bit_comes_from_one_parent(
            dim in 1usize..6,
            seed in any::<u64>(),
            rate in 0.05f64..0.95,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let p1 = Genotype::random(dim, &mut rng);
            let p2 = Genotype::random(dim, &mut rng);

            let (c1, c2) = p1.crossover(&p2, rate, &mut rng).unwrap();
            prop_assert_eq!(c1.bit_len(), p1.bit_len());
            prop_assert_eq!(c2.bit_len(), p1.bit_len());

            for ((&a, &b), (&x, &y)) in p1
                .genes()
                .iter()
                .zip(p2.genes())
                .zip(c1.genes().iter().zip(c2.genes()))
            {
                // Per bit position the children hold exactly the two parent
                // bits: {x, y} == {a, b} iff x^y == a^b and x&y == a&b.
                prop_assert_eq!(x ^ y, a ^ b);
                prop_assert_eq!(x & y, a & b);
            }
        }

        #[test]
        fn prop_mutation_preserves_length(dim in 1usize..8, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut g = Genotype::random(dim, &mut rng);
            g.mutate(0.5, &mut rng);
            prop_assert_eq!(g.dimensionality(), dim);
            prop_assert_eq!(g.bit_len(), dim * 32);
        }
    }
}
