//! Genetic operators for binary chromosomes.
//!
//! Every operator is a stateless transformation: it reads its inputs,
//! draws from the caller's random source and returns fresh data. Nothing
//! here keeps state between calls.
//!
//! # Operators
//!
//! - [`pair_all`]: every individual picks a uniformly random partner
//! - [`two_point_crossover`]: swap the middle segment of two parents
//! - [`crossover_pairs`]: apply crossover over a pairing, up to a child budget
//! - [`mutate`]: threshold-driven bit complement
//! - [`prune_keep_best`]: random survivors plus the single best
//!
//! # Threshold convention
//!
//! [`mutate`] fires when a uniform draw is strictly *greater* than its
//! threshold. A PMI of 0.3 therefore mutates about 70% of offspring, and a
//! PMG of 0.1 flips about 90% of the genes of a mutating offspring.

use super::types::{Chromosome, Population};
use rand::seq::index;
use rand::Rng;

// ============================================================================
// Pairing and crossover
// ============================================================================

/// Pairs every index with a partner drawn uniformly from the whole
/// population, itself included.
///
/// Returns exactly `population.len()` pairs; the first component of pair
/// `i` is `i`.
pub fn pair_all<R: Rng>(population: &Population, rng: &mut R) -> Vec<(usize, usize)> {
    let n = population.len();
    (0..n).map(|i| (i, rng.random_range(0..n))).collect()
}

/// Two-point crossover.
///
/// Draws distinct cut points `p1 < p2` uniformly from `1..len` and builds
///
/// - child A: `a[..p1] + b[p1..p2] + a[p2..]`
/// - child B: `b[..p1] + a[p1..p2] + b[p2..]`
///
/// Chromosomes of two genes or fewer have no two distinct interior points;
/// copies of the parents are returned unchanged.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn two_point_crossover<R: Rng>(
    a: &Chromosome,
    b: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let len = a.len();
    assert_eq!(len, b.len(), "parents must have equal length");

    if len <= 2 {
        return (a.clone(), b.clone());
    }

    let (p1, p2) = cut_points(len, rng);
    let child_a = splice(a.genes(), b.genes(), p1, p2);
    let child_b = splice(b.genes(), a.genes(), p1, p2);
    (child_a, child_b)
}

/// Two distinct points from `1..len`, sorted. Requires `len >= 3`.
fn cut_points<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.random_range(1..len);
    let mut second = rng.random_range(1..len - 1);
    if second >= first {
        second += 1;
    }
    (first.min(second), first.max(second))
}

/// `outer[..p1] + inner[p1..p2] + outer[p2..]`
fn splice(outer: &[bool], inner: &[bool], p1: usize, p2: usize) -> Chromosome {
    let mut genes = Vec::with_capacity(outer.len());
    genes.extend_from_slice(&outer[..p1]);
    genes.extend_from_slice(&inner[p1..p2]);
    genes.extend_from_slice(&outer[p2..]);
    Chromosome::new(genes)
}

/// Crosses every pair in order, collecting children until `target` is reached.
///
/// The budget can run out between the two children of one pair; the second
/// child is then dropped. At most `2 * pairs.len()` children are produced.
///
/// # Panics
/// Panics if a pair index is out of range.
pub fn crossover_pairs<R: Rng>(
    population: &Population,
    pairs: &[(usize, usize)],
    target: usize,
    rng: &mut R,
) -> Population {
    let mut offspring = Population::new(population.bits());
    for &(i, j) in pairs {
        if offspring.len() >= target {
            break;
        }
        let (child_a, child_b) = two_point_crossover(&population[i], &population[j], rng);
        offspring.push(child_a);
        if offspring.len() < target {
            offspring.push(child_b);
        }
    }
    offspring
}

// ============================================================================
// Mutation
// ============================================================================

/// Complement mutation with individual and gene thresholds.
///
/// For each individual a uniform `r` in `[0, 1)` is drawn; only when
/// `r > pmi` does the individual mutate. Each gene of a mutating individual
/// then draws its own `r'` and is complemented when `r' > pmg`.
///
/// Returns a new population of the same size; the input is untouched.
/// Individuals that do not mutate consume exactly one draw, so applying
/// `mutate` twice with identically seeded generators restores the input.
pub fn mutate<R: Rng>(population: &Population, pmi: f64, pmg: f64, rng: &mut R) -> Population {
    let mut mutated = Population::new(population.bits());
    for chromosome in population {
        if rng.random::<f64>() > pmi {
            let genes = chromosome
                .genes()
                .iter()
                .map(|&g| if rng.random::<f64>() > pmg { !g } else { g })
                .collect();
            mutated.push(Chromosome::new(genes));
        } else {
            mutated.push(chromosome.clone());
        }
    }
    mutated
}

// ============================================================================
// Survivor selection
// ============================================================================

/// Index of the highest fitness, first occurrence on ties.
///
/// NaN never wins against a number. Returns `None` for an empty slice.
pub fn best_index(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &f) in fitness.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let current = fitness[b];
                if f > current || (current.is_nan() && !f.is_nan()) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Arithmetic mean; negative infinity anywhere makes the mean negative
/// infinity. `NaN` for an empty slice.
pub fn mean(fitness: &[f64]) -> f64 {
    fitness.iter().sum::<f64>() / fitness.len() as f64
}

/// Shrinks a pool to `target` members, always keeping the best.
///
/// If the pool already has at most `target` members it is returned as is.
/// Otherwise the best individual (first occurrence on ties) is kept and
/// `target - 1` others are sampled uniformly without replacement. The best
/// comes first in the result; the order of the rest is unspecified.
///
/// # Panics
/// Panics if `population` and `fitness` have different lengths.
pub fn prune_keep_best<R: Rng>(
    population: Population,
    fitness: Vec<f64>,
    target: usize,
    rng: &mut R,
) -> (Population, Vec<f64>) {
    assert_eq!(
        population.len(),
        fitness.len(),
        "population and fitness must have equal length"
    );

    let n = population.len();
    if n <= target {
        return (population, fitness);
    }
    if target == 0 {
        return (Population::new(population.bits()), Vec::new());
    }

    // n > target >= 1, so the pool is non-empty
    let best = best_index(&fitness).unwrap_or(0);
    let others: Vec<usize> = (0..n).filter(|&i| i != best).collect();

    let mut keep = Vec::with_capacity(target);
    keep.push(best);
    keep.extend(index::sample(rng, others.len(), target - 1).into_iter().map(|k| others[k]));

    let survivors = population.select(&keep);
    let survivor_fitness = keep.iter().map(|&i| fitness[i]).collect();
    (survivors, survivor_fitness)
}

// ============================================================================
// Tests
// ============================================================================
