//! Population store and the objective contract.
//!
//! [`Chromosome`] and [`Population`] are plain data: they own bits and
//! compare by value. All behaviour lives in [`codec`](super::codec),
//! [`operators`](super::operators) and the engine.

use crate::error::{GaError, Result};
use std::fmt;

/// A fixed-length bit string encoding one candidate value.
///
/// Bit 0 is the most significant bit of the encoded integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// All-zero chromosome of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            genes: vec![false; len],
        }
    }

    /// All-one chromosome of the given length.
    pub fn ones(len: usize) -> Self {
        Self {
            genes: vec![true; len],
        }
    }

    /// The genes, most significant first.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn hamming_distance(&self, other: &Chromosome) -> usize {
        assert_eq!(self.len(), other.len(), "chromosomes must have equal length");
        self.genes
            .iter()
            .zip(other.genes.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// An ordered, rectangular collection of chromosomes.
///
/// Every member has exactly [`bits`](Population::bits) genes. Order carries
/// no meaning for the algorithm but is stable, so indices produced by
/// pairing stay valid for the whole generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    bits: usize,
    individuals: Vec<Chromosome>,
}

impl Population {
    /// Empty population whose members will have `bits` genes.
    pub fn new(bits: usize) -> Self {
        Self {
            bits,
            individuals: Vec::new(),
        }
    }

    /// Builds a population, checking that every chromosome has `bits` genes.
    pub fn from_chromosomes(bits: usize, individuals: Vec<Chromosome>) -> Result<Self> {
        if let Some(bad) = individuals.iter().find(|c| c.len() != bits) {
            return Err(GaError::LengthMismatch {
                expected: bits,
                actual: bad.len(),
            });
        }
        Ok(Self { bits, individuals })
    }

    /// Chromosome length shared by all members.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Members in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Chromosome] {
        &self.individuals
    }

    /// Appends a member.
    ///
    /// # Panics
    /// Panics if the chromosome length differs from [`bits`](Population::bits).
    pub fn push(&mut self, chromosome: Chromosome) {
        assert_eq!(
            chromosome.len(),
            self.bits,
            "chromosome length must match population"
        );
        self.individuals.push(chromosome);
    }

    /// Concatenates `other` after `self`, keeping both orders.
    ///
    /// # Panics
    /// Panics if the chromosome lengths differ.
    pub fn concat(mut self, other: Population) -> Population {
        assert_eq!(self.bits, other.bits, "populations must share chromosome length");
        self.individuals.extend(other.individuals);
        self
    }

    /// New population holding clones of the members at `indices`, in order.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn select(&self, indices: &[usize]) -> Population {
        Population {
            bits: self.bits,
            individuals: indices.iter().map(|&i| self.individuals[i].clone()).collect(),
        }
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Chromosome;

    fn index(&self, index: usize) -> &Chromosome {
        &self.individuals[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

/// The scalar function being maximized.
///
/// Higher is better. An objective may return `f64::NEG_INFINITY` to mark an
/// argument outside its valid domain; the engine carries that value through
/// max and mean like any other score.
///
/// Any `Fn(f64) -> f64 + Send + Sync` closure implements this trait.
///
/// # Thread Safety
///
/// `Objective` must be `Send + Sync` because fitness may be evaluated in
/// parallel when the `parallel` feature is enabled.
pub trait Objective: Send + Sync {
    /// Scores a decoded value.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chrom(s: &str) -> Chromosome {
        Chromosome::new(s.chars().map(|c| c == '1').collect())
    }

    #[test]
    fn test_chromosome_display() {
        assert_eq!(chrom("10110").to_string(), "10110");
        assert_eq!(Chromosome::zeros(3).to_string(), "000");
        assert_eq!(Chromosome::ones(2).to_string(), "11");
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(chrom("0000").hamming_distance(&chrom("0000")), 0);
        assert_eq!(chrom("1010").hamming_distance(&chrom("0101")), 4);
        assert_eq!(chrom("1100").hamming_distance(&chrom("1001")), 2);
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn test_hamming_distance_length_mismatch() {
        chrom("10").hamming_distance(&chrom("101"));
    }

    #[test]
    fn test_population_from_chromosomes_checks_length() {
        let ok = Population::from_chromosomes(3, vec![chrom("101"), chrom("000")]);
        assert_eq!(ok.unwrap().len(), 2);

        let err = Population::from_chromosomes(3, vec![chrom("101"), chrom("00")]);
        assert_eq!(
            err,
            Err(GaError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_population_concat_and_select() {
        let a = Population::from_chromosomes(2, vec![chrom("00"), chrom("01")]).unwrap();
        let b = Population::from_chromosomes(2, vec![chrom("10"), chrom("11")]).unwrap();
        let pool = a.concat(b);
        assert_eq!(pool.len(), 4);
        assert_eq!(pool[3], chrom("11"));

        let picked = pool.select(&[3, 0, 3]);
        assert_eq!(picked.as_slice(), &[chrom("11"), chrom("00"), chrom("11")]);
        assert_eq!(picked.bits(), 2);
    }

    #[test]
    fn test_population_equality_is_by_value() {
        let a = Population::from_chromosomes(2, vec![chrom("01")]).unwrap();
        let mut b = Population::new(2);
        b.push(chrom("01"));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "must match population")]
    fn test_population_push_wrong_length() {
        let mut p = Population::new(4);
        p.push(chrom("01"));
    }

    #[test]
    fn test_closure_is_objective() {
        let f = |x: f64| 2.0 * x;
        assert_eq!(Objective::evaluate(&f, 1.5), 3.0);
    }
}
