//! Drift checks on conserved quantities over moderate runs
//!
//! The chained per-body update order trades exact momentum symmetry for
//! simplicity, so these bounds are loose. They catch sign mistakes and
//! blowups, not last-digit drift.

use threebody_core::diagnostics::{total_energy, total_momentum};
use threebody_core::scenario::Scenario;
use threebody_core::tests::test_helpers::step_n;

#[test]
fn test_momentum_starts_at_zero_and_stays_small() {
    let mut system = Scenario::by_name("bumblebee")
        .expect("built-in scenario")
        .system();

    // The third body's velocity is exactly -2x the shared pair velocity,
    // so the initial total momentum cancels to zero in f64
    let initial = total_momentum(&system);
    assert!(initial.length() < 1e-15, "initial momentum {}", initial);

    step_n(&mut system, 1e-4, 10_000);

    let drifted = total_momentum(&system);
    assert!(drifted.length() < 1e-3, "momentum drifted to {}", drifted);
}

#[test]
fn test_momentum_drift_is_bounded_for_chaotic_start() {
    // chaos-2 keeps all pair separations near unity over this span, so the
    // drift bound does not have to absorb a close encounter
    let mut system = Scenario::by_name("chaos-2")
        .expect("built-in scenario")
        .system();
    let initial = total_momentum(&system);

    step_n(&mut system, 1e-4, 10_000);

    let drift = (total_momentum(&system) - initial).length();
    assert!(drift < 1e-3, "momentum drift {}", drift);
}

#[test]
fn test_energy_drift_is_bounded() {
    for name in ["bumblebee", "circle"] {
        let mut system = Scenario::by_name(name).expect("built-in scenario").system();
        let initial = total_energy(&system);
        assert!(initial < 0.0, "{} should start bound, E = {}", name, initial);

        step_n(&mut system, 1e-4, 10_000);

        let drift = (total_energy(&system) - initial).abs() / initial.abs();
        assert!(drift < 1e-2, "{} relative energy drift {}", name, drift);
    }
}
