//! Binary-encoded genetic algorithm.
//!
//! Candidates are bit strings of a length `B` derived once per run from
//! the domain and precision. [`GaEngine`] drives generations over a
//! population of [`Chromosome`]s scored by an [`Objective`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: run parameters with builders and presets
//! - [`GaEngine`]: step, run and snapshot entry points
//! - [`Snapshot`], [`GenerationStats`], [`History`]: what a run reports
//!
//! # Submodules
//!
//! - [`codec`]: bit length, decoding, encoding, random initialization
//! - [`operators`]: pairing, two-point crossover, complement mutation, pruning
//! - [`diagnostics`]: Hamming diversity and convergence reports

pub mod codec;
mod config;
pub mod diagnostics;
pub mod operators;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::{GaEngine, GenerationStats, History, Snapshot};
pub use types::{Chromosome, Objective, Population};
