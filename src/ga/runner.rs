//! GA generation loop.
//!
//! [`GaEngine`] owns the run state (population, best-so-far, history,
//! generation counter) and a single run-scoped random source. Each call to
//! [`step_generation`](GaEngine::step_generation) performs
//!
//! evaluate → record → pair → crossover → mutate → evaluate offspring →
//! merge → prune
//!
//! The population has exactly `N` members between steps. Inside a step the
//! parents and offspring form a larger combined pool that pruning brings
//! back to `N`.

use super::codec;
use super::config::GaConfig;
use super::operators::{best_index, crossover_pairs, mean, mutate, pair_all, prune_keep_best};
use super::types::{Chromosome, Objective, Population};
use crate::error::Result;
use crate::random::rng_from_seed;
use log::{debug, info, trace};
use rand::rngs::StdRng;

/// Summary of one generation, taken before breeding.
///
/// Describes the generation's own best, which may be worse than the run's
/// best-so-far.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based index of the generation that was evaluated.
    pub generation: usize,

    /// Highest fitness in the population.
    pub best_fitness: f64,

    /// Mean fitness of the population.
    pub mean_fitness: f64,

    /// Decoded value of the best individual.
    pub best_value: f64,

    /// The best individual itself.
    pub best_chromosome: Chromosome,
}

/// Per-generation statistics, one entry per completed step.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History {
    /// Best fitness of each generation.
    pub best_fitness: Vec<f64>,

    /// Mean fitness of each generation.
    pub mean_fitness: Vec<f64>,

    /// Decoded value of each generation's best individual.
    pub best_value: Vec<f64>,
}

impl History {
    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.best_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best_fitness.is_empty()
    }

    fn record(&mut self, stats: &GenerationStats) {
        self.best_fitness.push(stats.best_fitness);
        self.mean_fitness.push(stats.mean_fitness);
        self.best_value.push(stats.best_value);
    }
}

/// Read-only view of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Best individual seen so far; `None` before the first step.
    pub best_chromosome: Option<Chromosome>,

    /// Fitness of [`best_chromosome`](Snapshot::best_chromosome);
    /// negative infinity before the first step.
    pub best_fitness: f64,

    /// Decoded value of [`best_chromosome`](Snapshot::best_chromosome).
    pub best_value: Option<f64>,

    /// Statistics of every completed generation.
    pub history: History,

    /// Number of completed generations.
    pub generation: usize,
}

/// Binary GA engine maximizing an [`Objective`].
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaEngine};
///
/// let config = GaConfig::default().with_population_size(30).with_seed(1);
/// let mut engine = GaEngine::new(|x: f64| x.sin(), config).unwrap();
///
/// let stats = engine.step_generation();
/// assert_eq!(stats.generation, 0);
/// assert_eq!(engine.population().len(), 30);
///
/// let snapshot = engine.run(9);
/// assert_eq!(snapshot.generation, 10);
/// assert_eq!(snapshot.history.len(), 10);
/// ```
pub struct GaEngine<O: Objective> {
    objective: O,
    config: GaConfig,
    bits: usize,
    rng: StdRng,
    population: Population,
    generation: usize,
    best: Option<(Chromosome, f64)>,
    history: History,
}

impl<O: Objective> GaEngine<O> {
    /// Validates `config` and draws the initial population.
    ///
    /// The random source is seeded from `config.seed`, or from the
    /// operating system when no seed is set.
    pub fn new(objective: O, config: GaConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(objective, config, rng)
    }

    /// Like [`new`](GaEngine::new) but with an injected random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(objective: O, config: GaConfig, mut rng: StdRng) -> Result<Self> {
        let bits = config.bits()?;
        debug!(
            "binary GA: domain [{}, {}], precision {}, {} bits, population {}",
            config.lower, config.upper, config.precision, bits, config.population_size
        );
        let population = codec::init_population(config.population_size, bits, &mut rng);
        Ok(Self {
            objective,
            config,
            bits,
            rng,
            population,
            generation: 0,
            best: None,
            history: History::default(),
        })
    }

    /// Runs one generation and returns the statistics of the population
    /// it started from.
    pub fn step_generation(&mut self) -> GenerationStats {
        let n = self.config.population_size;

        // 1-3. Evaluate, track the best, record history
        let fitness = self.evaluate(&self.population);
        let idx = best_index(&fitness).unwrap_or(0);
        let best_chromosome = self.population[idx].clone();
        let stats = GenerationStats {
            generation: self.generation,
            best_fitness: fitness[idx],
            mean_fitness: mean(&fitness),
            best_value: self.decode(&best_chromosome),
            best_chromosome,
        };

        let improved = match &self.best {
            None => true,
            // NaN never stays best once a number shows up
            Some((_, best_fitness)) => {
                stats.best_fitness > *best_fitness
                    || (best_fitness.is_nan() && !stats.best_fitness.is_nan())
            }
        };
        if improved {
            trace!(
                "generation {}: new best {} at x = {}",
                stats.generation,
                stats.best_fitness,
                stats.best_value
            );
            self.best = Some((stats.best_chromosome.clone(), stats.best_fitness));
        }
        self.history.record(&stats);

        // 4-7. Breed and score offspring
        let pairs = pair_all(&self.population, &mut self.rng);
        let children = crossover_pairs(
            &self.population,
            &pairs,
            self.config.offspring_count(),
            &mut self.rng,
        );
        let children = mutate(
            &children,
            self.config.individual_mutation_threshold,
            self.config.gene_mutation_threshold,
            &mut self.rng,
        );
        let child_fitness = self.evaluate(&children);

        // 8-9. Merge parents and offspring, prune back to N
        let parents = std::mem::replace(&mut self.population, Population::new(self.bits));
        let pool = parents.concat(children);
        let mut pool_fitness = fitness;
        pool_fitness.extend(child_fitness);
        let pool_size = pool.len();
        let (survivors, _) = prune_keep_best(pool, pool_fitness, n, &mut self.rng);
        debug_assert_eq!(survivors.len(), n.min(pool_size));
        self.population = survivors;

        // 10.
        self.generation += 1;

        debug!(
            "generation {}: best {:.6}, mean {:.6}, pool {} -> {}",
            stats.generation,
            stats.best_fitness,
            stats.mean_fitness,
            pool_size,
            self.population.len()
        );
        stats
    }

    /// Runs `steps` generations and returns the resulting snapshot.
    pub fn run(&mut self, steps: usize) -> Snapshot {
        for _ in 0..steps {
            self.step_generation();
        }
        let snapshot = self.snapshot();
        info!(
            "binary GA finished {} generations: best fitness {} at x = {:?}",
            snapshot.generation, snapshot.best_fitness, snapshot.best_value
        );
        snapshot
    }

    /// Runs the configured generation budget.
    pub fn run_to_budget(&mut self) -> Snapshot {
        self.run(self.config.max_generations)
    }

    /// Best-so-far, history and generation counter. No side effects.
    pub fn snapshot(&self) -> Snapshot {
        let (best_chromosome, best_fitness) = match &self.best {
            Some((c, f)) => (Some(c.clone()), *f),
            None => (None, f64::NEG_INFINITY),
        };
        Snapshot {
            best_value: best_chromosome.as_ref().map(|c| self.decode(c)),
            best_chromosome,
            best_fitness,
            history: self.history.clone(),
            generation: self.generation,
        }
    }

    /// The current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Chromosome length derived for this run.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Parameters this run was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Decodes a chromosome with this run's domain.
    pub fn decode(&self, chromosome: &Chromosome) -> f64 {
        codec::decode(chromosome, self.config.lower, self.config.upper, self.bits)
    }

    /// Fitness of every member, in population order.
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                use rayon::prelude::*;
                return population
                    .as_slice()
                    .par_iter()
                    .map(|c| self.objective.evaluate(self.decode(c)))
                    .collect();
            }
        }
        population
            .iter()
            .map(|c| self.objective.evaluate(self.decode(c)))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
