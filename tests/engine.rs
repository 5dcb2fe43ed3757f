//! End-to-end runs of the binary GA.

use u_bitga::ga::codec::{bit_length, decode, from_integer};
use u_bitga::ga::diagnostics::{convergence_report, hamming_diversity};
use u_bitga::ga::{GaConfig, GaEngine};
use u_bitga::GaError;

/// `ln(10 + 3 cos(7x) - 5 sin(13x) + |x|)`, negative infinity where the
/// logarithm is undefined.
fn log_trig(x: f64) -> f64 {
    let arg = 10.0 + 3.0 * (7.0 * x).cos() - 5.0 * (13.0 * x).sin() + x.abs();
    if arg <= 0.0 {
        f64::NEG_INFINITY
    } else {
        arg.ln()
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn identity_objective_on_one_bit_domain() {
    init_logging();
    let config = GaConfig::default()
        .with_domain(0.0, 1.0)
        .with_precision(1.0)
        .with_population_size(4)
        .with_seed(42);
    assert_eq!(config.bits().unwrap(), 1);

    let mut engine = GaEngine::new(|x: f64| x, config).unwrap();
    let snapshot = engine.run(30);

    assert_eq!(snapshot.best_fitness, 1.0);
    assert_eq!(snapshot.best_value, Some(1.0));
    let best = snapshot.best_chromosome.unwrap();
    assert_eq!(best.to_string(), "1");
    assert_eq!(decode(&best, 0.0, 1.0, 1), 1.0);
}

#[test]
fn reference_objective_finds_grid_maximum() {
    init_logging();
    let config = GaConfig::default().with_seed(2024);
    let (lower, upper, precision) = (config.lower, config.upper, config.precision);
    let bits = bit_length(lower, upper, precision);

    // Exhaustive maximum over every representable chromosome.
    let grid_best = (0..1u64 << bits)
        .map(|v| log_trig(decode(&from_integer(v, bits), lower, upper, bits)))
        .fold(f64::NEG_INFINITY, f64::max);

    let mut engine = GaEngine::new(log_trig, config).unwrap();
    let snapshot = engine.run_to_budget();

    assert_eq!(snapshot.generation, 50);
    assert!(
        (snapshot.best_fitness - grid_best).abs() < 1e-12,
        "GA best {} differs from grid best {}",
        snapshot.best_fitness,
        grid_best
    );
    let x = snapshot.best_value.unwrap();
    assert!((lower..=upper).contains(&x));
    assert!((log_trig(x) - snapshot.best_fitness).abs() < 1e-12);
}

#[test]
fn invalid_region_is_scored_not_rejected() {
    init_logging();
    let config = GaConfig::default()
        .with_domain(-1.0, 1.0)
        .with_precision(0.001)
        .with_population_size(30)
        .with_seed(9);
    let ln = |x: f64| if x <= 0.0 { f64::NEG_INFINITY } else { x.ln() };

    let mut engine = GaEngine::new(ln, config).unwrap();
    let snapshot = engine.run(40);

    assert!(snapshot.best_fitness > f64::NEG_INFINITY);
    assert!(snapshot.best_value.unwrap() > 0.0);
    assert!(snapshot
        .history
        .mean_fitness
        .iter()
        .any(|&m| m == f64::NEG_INFINITY));
    assert!(snapshot.history.mean_fitness.iter().all(|m| !m.is_nan()));
}

#[test]
fn configuration_errors_surface_at_construction() {
    let cases = [
        GaConfig::default().with_domain(1.0, 1.0),
        GaConfig::default().with_precision(0.0),
        GaConfig::default().with_population_size(0),
        GaConfig::default().with_growth_factor(0.0),
    ];
    for config in cases {
        assert!(GaEngine::new(|x: f64| x, config).is_err());
    }

    let mut config = GaConfig::default();
    config.individual_mutation_threshold = -0.1;
    assert_eq!(
        GaEngine::new(|x: f64| x, config).err(),
        Some(GaError::InvalidProbability {
            name: "individual_mutation_threshold",
            value: -0.1
        })
    );
}

#[test]
fn step_and_run_interleave() {
    let config = GaConfig::fast().with_seed(3);
    let mut engine = GaEngine::new(log_trig, config).unwrap();

    let first = engine.step_generation();
    assert_eq!(first.generation, 0);
    let snapshot = engine.run(4);
    assert_eq!(snapshot.generation, 5);
    assert_eq!(snapshot.history.best_fitness[0], first.best_fitness);
    assert_eq!(snapshot.history.best_value[0], first.best_value);
    assert_eq!(snapshot.history.mean_fitness[0], first.mean_fitness);
}

#[test]
fn diagnostics_over_a_run() {
    let config = GaConfig::default().with_population_size(40).with_seed(11);
    let mut engine = GaEngine::new(log_trig, config).unwrap();
    let snapshot = engine.run(60);

    let diversity = hamming_diversity(engine.population());
    assert!((0.0..=engine.bits() as f64).contains(&diversity));

    let report = convergence_report(&snapshot.history.best_fitness);
    // The generation best never regresses, so both rates are non-negative.
    assert!(report.early_rate >= 0.0);
    assert!(report.late_rate >= 0.0);
    if let Some(g) = report.converged_at {
        assert!(g < snapshot.history.len());
    }
}
