//! Engine configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::GaError;
use crate::genotype::Domain;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the genetic algorithm engine.
///
/// Controls population size, operator rates, genotype shape, and the
/// decoding domain. Validated once by [`Engine::new`](crate::Engine::new)
/// (or explicitly via [`validate`](GaConfig::validate)); setters do not
/// clamp, so out-of-range values surface as [`GaError`]s instead of being
/// silently corrected.
///
/// # Defaults
///
/// ```
/// use evobit::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evobit::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_dimensionality(4)
///     .with_tournament_size(5)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals per generation.
    ///
    /// Must be positive and even — reproduction fills the breeding
    /// population two children at a time.
    pub population_size: usize,

    /// Number of generational cycles to execute.
    ///
    /// Zero is legal: the run degenerates to ranking one random population
    /// and reporting its extremes. Termination is solely bounded by this
    /// count; there is no convergence criterion.
    pub generations: usize,

    /// Per-bit flip probability, in (0, 1) exclusive.
    ///
    /// Applied independently to every bit of every bred individual.
    /// Typical range: 0.001–0.05.
    pub mutation_rate: f64,

    /// Probability that a selected parent pair is crossed rather than
    /// cloned into the breeding population, in (0, 1) exclusive.
    pub reproduction_rate: f64,

    /// Per-bit inheritance probability within crossover, in (0, 1)
    /// exclusive.
    ///
    /// Near 0.5 yields maximal allele mixing; near the interval ends the
    /// children approach clones of the parents.
    pub crossover_rate: f64,

    /// Number of real-valued decision variables. Must be positive.
    ///
    /// Each variable occupies one 32-bit word of the genotype.
    pub dimensionality: usize,

    /// Samples drawn per tournament. Must be positive.
    ///
    /// Larger tournaments increase selection pressure toward the fittest
    /// individuals. Values above `population_size` are legal (sampling is
    /// with replacement) but add no pressure, so staying at or below the
    /// population size is recommended.
    pub tournament_size: usize,

    /// Individuals carried verbatim from each generation into the next.
    ///
    /// Must not exceed `population_size / 2`.
    pub elite_size: usize,

    /// The interval each decision variable decodes into.
    pub domain: Domain,

    /// Whether to track the worst individual seen alongside the best.
    pub track_worst: bool,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Evaluation consumes no RNG draws, so parallel and sequential runs
    /// of the same seed produce identical results.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            mutation_rate: 0.01,
            reproduction_rate: 0.8,
            crossover_rate: 0.5,
            dimensionality: 2,
            tournament_size: 10,
            elite_size: 20,
            domain: Domain::default(),
            track_worst: false,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the pair reproduction (crossover gate) rate.
    pub fn with_reproduction_rate(mut self, rate: f64) -> Self {
        self.reproduction_rate = rate;
        self
    }

    /// Sets the per-bit crossover inheritance rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the number of decision variables.
    pub fn with_dimensionality(mut self, n: usize) -> Self {
        self.dimensionality = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, n: usize) -> Self {
        self.tournament_size = n;
        self
    }

    /// Sets the elite size.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the decoding domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Enables or disables worst-individual tracking.
    pub fn with_track_worst(mut self, track: bool) -> Self {
        self.track_worst = track;
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`GaError::InvalidArgument`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::invalid("population_size", "must be positive"));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::invalid(
                "population_size",
                format!("must be even, got {}", self.population_size),
            ));
        }
        if self.dimensionality == 0 {
            return Err(GaError::invalid("dimensionality", "must be positive"));
        }
        if self.tournament_size == 0 {
            return Err(GaError::invalid("tournament_size", "must be positive"));
        }
        if self.elite_size > self.population_size / 2 {
            return Err(GaError::invalid(
                "elite_size",
                format!(
                    "must not exceed population_size / 2 ({}), got {}",
                    self.population_size / 2,
                    self.elite_size
                ),
            ));
        }
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("reproduction_rate", self.reproduction_rate),
            ("crossover_rate", self.crossover_rate),
        ] {
            if !(rate > 0.0 && rate < 1.0) {
                return Err(GaError::invalid(
                    name,
                    format!("must lie strictly between 0 and 1, got {rate}"),
                ));
            }
        }
        if !(self.domain.min.is_finite() && self.domain.max.is_finite())
            || self.domain.min >= self.domain.max
        {
            return Err(GaError::invalid(
                "domain",
                format!(
                    "bounds must be finite with min < max, got [{}, {}]",
                    self.domain.min, self.domain.max
                ),
            ));
        }
        Ok(())
    }
}
