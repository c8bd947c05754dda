//! The generational loop.
//!
//! [`Engine`] orchestrates the complete evolutionary process:
//! initialization → ranking → repeated {selection, crossover, mutation,
//! ranking, elitist succession} for a fixed number of generations, while
//! tracking the best (and optionally worst) individual seen.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

use crate::config::GaConfig;
use crate::error::GaError;
use crate::genotype::Genotype;
use crate::ranking::rank;
use crate::selection::tournament;
use crate::types::Objective;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a completed run.
///
/// The best and worst genotypes are independent deep copies captured at
/// the moment each extremum was observed — they never alias an individual
/// that later mutated inside a live population.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Genotype,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Generation at which the best individual was first observed.
    ///
    /// Generation 0 is the initial random population.
    pub best_generation: usize,

    /// The worst individual seen, when worst-tracking is enabled.
    pub worst: Option<Genotype>,

    /// Generation at which the worst individual was first observed.
    pub worst_generation: Option<usize>,

    /// Number of generational cycles executed.
    pub generations: usize,

    /// Best-so-far fitness after the initial ranking and after each
    /// generation (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop for one objective function.
///
/// # Usage
///
/// ```
/// use evobit::{Engine, GaConfig};
///
/// let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
/// let config = GaConfig::default().with_generations(50).with_seed(42);
/// let result = Engine::new(config, sphere).unwrap().run();
/// assert!(result.best_fitness.is_finite());
/// ```
pub struct Engine<O: Objective> {
    config: GaConfig,
    objective: O,
    rng: StdRng,
}

impl<O: Objective> Engine<O> {
    /// Creates an engine, validating the configuration.
    ///
    /// The engine owns its random source: seeded from
    /// [`GaConfig::seed`] when set, from entropy otherwise. Every random
    /// draw of the run flows through this one generator in a fixed order,
    /// so equal seeds give equal runs.
    ///
    /// # Errors
    ///
    /// [`GaError::InvalidArgument`] for any constraint violated by the
    /// configuration.
    pub fn new(config: GaConfig, objective: O) -> Result<Self, GaError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            config,
            objective,
            rng,
        })
    }

    /// Runs the configured number of generations and returns the result.
    ///
    /// The initial random population counts as generation 0; with
    /// `generations == 0` the run reduces to ranking that single
    /// population and reporting its extremes.
    pub fn run(&mut self) -> GaResult {
        let pop_size = self.config.population_size;

        let mut population: Vec<Genotype> = (0..pop_size)
            .map(|_| Genotype::random(self.config.dimensionality, &mut self.rng))
            .collect();
        rank(
            &mut population,
            &self.objective,
            &self.config.domain,
            self.config.parallel,
        );

        let mut best = population[0].clone();
        let mut best_generation = 0;
        let mut worst = self
            .config
            .track_worst
            .then(|| population[pop_size - 1].clone());
        let mut worst_generation = self.config.track_worst.then_some(0);

        let mut fitness_history = Vec::with_capacity(self.config.generations + 1);
        fitness_history.push(best.fitness());

        for generation in 1..=self.config.generations {
            let mut breeding = self.breed(&population);
            for child in breeding.iter_mut() {
                child.mutate(self.config.mutation_rate, &mut self.rng);
            }
            rank(
                &mut breeding,
                &self.objective,
                &self.config.domain,
                self.config.parallel,
            );
            population = self.succeed(&population, &breeding);

            if population[0].fitness() < best.fitness() {
                best = population[0].clone();
                best_generation = generation;
            }
            if let Some(worst) = worst.as_mut() {
                if population[pop_size - 1].fitness() > worst.fitness() {
                    *worst = population[pop_size - 1].clone();
                    worst_generation = Some(generation);
                }
            }
            fitness_history.push(best.fitness());
        }

        GaResult {
            best_fitness: best.fitness(),
            best,
            best_generation,
            worst,
            worst_generation,
            generations: self.config.generations,
            fitness_history,
        }
    }

    /// Breeds a full population from the ranked current one.
    ///
    /// `population_size / 2` parent pairs are picked by tournament; each
    /// pair either crosses (below the reproduction gate) or advances as
    /// two independent clones.
    fn breed(&mut self, current: &[Genotype]) -> Vec<Genotype> {
        let mut breeding = Vec::with_capacity(self.config.population_size);
        while breeding.len() < self.config.population_size {
            let parent1 = tournament(current, self.config.tournament_size, &mut self.rng);
            let parent2 = tournament(current, self.config.tournament_size, &mut self.rng);

            if self.rng.random_range(0.0..1.0) < self.config.reproduction_rate {
                let (child1, child2) = current[parent1]
                    .crossover(&current[parent2], self.config.crossover_rate, &mut self.rng)
                    .expect("genotypes in one population share a bit length");
                breeding.push(child1);
                breeding.push(child2);
            } else {
                breeding.push(current[parent1].clone());
                breeding.push(current[parent2].clone());
            }
        }
        breeding
    }

    /// Elitist succession: the first `elite_size` of the current
    /// population plus the best of the breeding population, re-sorted by
    /// the fitness values both rankings already computed.
    fn succeed(&self, current: &[Genotype], breeding: &[Genotype]) -> Vec<Genotype> {
        let elite = self.config.elite_size;
        let mut next = Vec::with_capacity(self.config.population_size);
        next.extend_from_slice(&current[..elite]);
        next.extend_from_slice(&breeding[..self.config.population_size - elite]);
        next.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        next
    }
}
