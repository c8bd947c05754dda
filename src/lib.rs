//! Generational genetic algorithm over binary-encoded continuous domains.
//!
//! Minimizes a user-supplied black-box objective function over a
//! fixed-dimensional continuous domain. Candidate solutions are
//! binary-encoded genotypes (one 32-bit word per decision variable);
//! evolution uses tournament selection, uniform mask crossover, per-bit
//! flip mutation, and elitist succession over a fixed number of
//! generations.
//!
//! # Core Trait
//!
//! - [`Objective`]: the fitness function contract — implemented for free
//!   by any `Fn(&[f64]) -> f64 + Send + Sync`
//!
//! # Key Types
//!
//! - [`GaConfig`]: algorithm parameters, validated at engine construction
//! - [`Domain`]: the interval each decision variable decodes into
//! - [`Engine`]: executes the evolutionary loop
//! - [`GaResult`]: best/worst individuals found, with the generation each
//!   was observed in and a per-generation fitness history
//!
//! # Example
//!
//! ```
//! use evobit::{Domain, Engine, GaConfig};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//!
//! let config = GaConfig::default()
//!     .with_population_size(60)
//!     .with_generations(100)
//!     .with_dimensionality(2)
//!     .with_domain(Domain::new(-100.0, 100.0))
//!     .with_seed(42);
//!
//! let result = Engine::new(config, sphere).unwrap().run();
//! assert!(result.best_fitness <= result.fitness_history[0]);
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one seeded generator owned by the engine
//! and consumed in a fixed order; runs with equal seeds are identical.
//! Parallel fitness evaluation (rayon, opt-in per config) consumes no
//! random draws and therefore preserves this guarantee.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod engine;
mod error;
mod genotype;
mod ranking;
mod selection;
mod types;

pub use config::GaConfig;
pub use engine::{Engine, GaResult};
pub use error::GaError;
pub use genotype::{Domain, Genotype};
pub use ranking::rank;
pub use selection::tournament;
pub use types::Objective;
