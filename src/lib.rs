//! Binary-encoded genetic algorithm over a bounded real interval.
//!
//! Searches `[lower, upper]` for the maximum of a user-supplied scalar
//! objective. Candidates are fixed-length bit strings decoded by linear
//! interpolation; each generation pairs every individual with a random
//! partner, applies two-point crossover and threshold-driven complement
//! mutation, then prunes parents plus offspring back to the base size while
//! always keeping the best.
//!
//! - [`ga::GaConfig`]: run parameters, presets and validation
//! - [`ga::GaEngine`]: owns the population and drives generations
//! - [`ga::codec`]: bit-length derivation, decoding and encoding
//! - [`ga::operators`]: pairing, crossover, mutation and pruning
//! - [`ga::diagnostics`]: read-only analysis of populations and histories
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaEngine};
//!
//! let config = GaConfig::default()
//!     .with_domain(0.0, 4.0)
//!     .with_precision(0.01)
//!     .with_population_size(40)
//!     .with_seed(42);
//!
//! let mut engine = GaEngine::new(|x: f64| -(x - 3.0).powi(2), config).unwrap();
//! let snapshot = engine.run(60);
//!
//! assert_eq!(snapshot.generation, 60);
//! assert!(snapshot.best_fitness > -0.01);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
