//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that stays fixed for the lifetime of
//! a run: the search domain, precision, population sizing, mutation
//! thresholds and the generation budget.

use super::codec;
use crate::error::{GaError, Result};

/// Configuration for the binary GA.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 50);
/// assert_eq!(config.bits().unwrap(), 8);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_domain(-1.0, 1.0)
///     .with_precision(0.001)
///     .with_population_size(200)
///     .with_individual_mutation_threshold(0.5)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Lower bound of the search domain (inclusive).
    pub lower: f64,

    /// Upper bound of the search domain (inclusive).
    pub upper: f64,

    /// Required resolution of the decoded value.
    ///
    /// Determines the chromosome length: the smallest `B` with
    /// `2^B >= (upper - lower) / precision + 1`.
    pub precision: f64,

    /// Base population size `N`, restored by pruning every generation.
    pub population_size: usize,

    /// Individual-level mutation threshold (PMI, 0.0–1.0).
    ///
    /// An offspring undergoes gene-level mutation only when its uniform
    /// draw is strictly greater than this value, so the per-individual
    /// mutation rate is `1 - PMI`.
    pub individual_mutation_threshold: f64,

    /// Gene-level mutation threshold (PMG, 0.0–1.0).
    ///
    /// Inside a mutating individual, a bit is complemented when its own
    /// draw is strictly greater than this value.
    pub gene_mutation_threshold: f64,

    /// Offspring multiplier applied to the number of parent pairs.
    ///
    /// Each generation targets `round(N * 2 * growth_factor)` children.
    /// Crossover of `N` pairs yields at most `2N`, so factors above 1.0
    /// saturate at two children per pair.
    pub growth_factor: f64,

    /// Number of generations run by [`GaEngine::run_to_budget`](super::GaEngine::run_to_budget).
    pub max_generations: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only honoured when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            lower: 10.60,
            upper: 18.20,
            precision: 0.04,
            population_size: 100,
            individual_mutation_threshold: 0.3,
            gene_mutation_threshold: 0.1,
            growth_factor: 1.5,
            max_generations: 50,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets both domain bounds.
    pub fn with_domain(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the required precision.
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the base population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the individual-level mutation threshold (PMI).
    pub fn with_individual_mutation_threshold(mut self, pmi: f64) -> Self {
        self.individual_mutation_threshold = pmi.clamp(0.0, 1.0);
        self
    }

    /// Sets the gene-level mutation threshold (PMG).
    pub fn with_gene_mutation_threshold(mut self, pmg: f64) -> Self {
        self.gene_mutation_threshold = pmg.clamp(0.0, 1.0);
        self
    }

    /// Sets the offspring growth factor.
    pub fn with_growth_factor(mut self, g: f64) -> Self {
        self.growth_factor = g;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: small population, short budget.
    ///
    /// - Population: 50, Generations: 30
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 30,
            ..Self::default()
        }
    }

    /// Preset for thorough runs: large population, long budget.
    ///
    /// - Population: 200, Generations: 150
    pub fn thorough() -> Self {
        Self {
            population_size: 200,
            max_generations: 150,
            ..Self::default()
        }
    }

    /// Target number of offspring per generation, before the `2N` cap.
    pub fn offspring_count(&self) -> usize {
        (self.population_size as f64 * 2.0 * self.growth_factor).round() as usize
    }

    /// Chromosome length `B` derived from the domain and precision.
    ///
    /// Validates the configuration first.
    pub fn bits(&self) -> Result<usize> {
        self.validate()?;
        Ok(codec::bit_length(self.lower, self.upper, self.precision))
    }

    /// Validates the configuration.
    ///
    /// Returns the first offending parameter as a [`GaError`].
    pub fn validate(&self) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.upper <= self.lower {
            return Err(GaError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }
        if !self.precision.is_finite() || self.precision <= 0.0 {
            return Err(GaError::InvalidPrecision(self.precision));
        }
        if self.population_size == 0 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 0.0 {
            return Err(GaError::InvalidGrowthFactor(self.growth_factor));
        }
        check_probability("individual_mutation_threshold", self.individual_mutation_threshold)?;
        check_probability("gene_mutation_threshold", self.gene_mutation_threshold)?;

        let bits = codec::bit_length(self.lower, self.upper, self.precision);
        if bits > codec::MAX_BITS {
            return Err(GaError::ChromosomeTooLong { bits });
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability { name, value })
    }
}
