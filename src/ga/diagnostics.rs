//! Read-only analysis of populations and fitness histories.
//!
//! Nothing here feeds back into [`GaEngine`](super::GaEngine); these helpers
//! summarize what a run already produced.

use super::types::Population;

/// Improvements smaller than this count as no improvement.
pub const CONVERGENCE_EPSILON: f64 = 1e-6;

/// Consecutive flat deltas required to declare convergence.
const FLAT_WINDOW: usize = 5;

/// Mean Hamming distance over all unordered pairs of members.
///
/// `0.0` when the population has fewer than two members.
pub fn hamming_diversity(population: &Population) -> f64 {
    let members = population.as_slice();
    let n = members.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0usize;
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            total += a.hamming_distance(b);
        }
    }
    let pairs = n * (n - 1) / 2;
    total as f64 / pairs as f64
}

/// Convergence summary of a best-fitness history.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceReport {
    /// First generation `i` whose following deltas `i..i + 5` are all below
    /// [`CONVERGENCE_EPSILON`] in magnitude.
    pub converged_at: Option<usize>,

    /// Converged within the first third of the history.
    pub fast_convergence: bool,

    /// Mean improvement per generation over the first half.
    pub early_rate: f64,

    /// Mean improvement per generation over the second half.
    pub late_rate: f64,

    /// The last `min(20, n / 4)` generations improved by less than
    /// [`CONVERGENCE_EPSILON`] per generation.
    pub stagnating: bool,
}

/// Analyzes a per-generation best-fitness series.
///
/// Histories shorter than two entries yield the default report.
pub fn convergence_report(best_history: &[f64]) -> ConvergenceReport {
    let n = best_history.len();
    if n < 2 {
        return ConvergenceReport::default();
    }

    let deltas: Vec<f64> = best_history.windows(2).map(|w| w[1] - w[0]).collect();
    let flat = |d: &f64| d.abs() < CONVERGENCE_EPSILON;
    let converged_at = (0..deltas.len()).find(|&i| {
        i + FLAT_WINDOW < deltas.len() && deltas[i..i + FLAT_WINDOW].iter().all(flat)
    });

    let half = n / 2;
    let early_rate = if half > 0 {
        (best_history[half] - best_history[0]) / half as f64
    } else {
        0.0
    };
    let late_rate = (best_history[n - 1] - best_history[half]) / (n - half) as f64;

    let tail = (n / 4).min(20);
    let stagnating = tail > 0
        && n > tail
        && best_history[n - 1] - best_history[n - tail] < CONVERGENCE_EPSILON * tail as f64;

    ConvergenceReport {
        converged_at,
        fast_convergence: converged_at.is_some_and(|g| g < n / 3),
        early_rate,
        late_rate,
        stagnating,
    }
}
