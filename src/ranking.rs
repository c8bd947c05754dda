//! Fitness evaluation and population ranking.

use crate::genotype::{Domain, Genotype};
use crate::types::Objective;
use rayon::prelude::*;

/// Evaluates every genotype and sorts the population ascending by fitness.
///
/// Fitness is recomputed for the whole population on every call — cached
/// values are never trusted across generations once genes may have changed.
/// The sort is stable, so equal-fitness genotypes keep their relative order
/// and ranking stays deterministic for a deterministic input order.
///
/// With `parallel` set, evaluation fans out over rayon; the objective is
/// called exactly once per genotype either way and no RNG draws are
/// involved, so both paths rank identically.
pub fn rank<O: Objective>(
    population: &mut [Genotype],
    objective: &O,
    domain: &Domain,
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|genotype| {
            let fitness = objective.evaluate(&genotype.decode(domain));
            genotype.set_fitness(fitness);
        });
    } else {
        for genotype in population.iter_mut() {
            let fitness = objective.evaluate(&genotype.decode(domain));
            genotype.set_fitness(fitness);
        }
    }

    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
