//! Unit tests for the leapfrog integrator and its chained update order

use glam::DVec2;
use threebody_core::engine::{Body, System};
use threebody_core::integrator::step;
use threebody_core::scenario::Scenario;
use threebody_core::tests::test_helpers::{approx_eq, approx_eq_vec, separation, step_n};

fn bumblebee_system() -> System {
    Scenario::by_name("bumblebee")
        .expect("built-in scenario")
        .system()
}

/// Inline gravitational force, spelled out independently of the engine
fn raw_force(a: &Body, b: &Body, g: f64) -> DVec2 {
    let d = b.position - a.position;
    let r = d.length();
    g * a.mass * b.mass * d / (r * r * r)
}

/// Kick-drift-kick for one body against two frozen partners, spelled out
/// independently of the integrator
fn raw_step_body(body: &mut Body, other1: &Body, other2: &Body, dt: f64, g: f64) {
    let f1 = raw_force(body, other1, g);
    let f2 = raw_force(body, other2, g);
    body.acceleration = (f1 + f2) / body.mass;
    body.velocity += 0.5 * body.acceleration * dt;
    body.position += body.velocity * dt;
    let f1 = raw_force(body, other1, g);
    let f2 = raw_force(body, other2, g);
    body.acceleration = (f1 + f2) / body.mass;
    body.velocity += 0.5 * body.acceleration * dt;
}

#[test]
fn test_step_matches_manual_leapfrog_bitwise() {
    let dt = 1e-4;
    let mut stepped = bumblebee_system();
    step(&mut stepped, dt);

    // Replay the same scheme by hand: body 0 against 1 and 2, then body 1
    // against the already-updated 0 and the old 2, then body 2 against both
    // updated partners
    let mut manual = bumblebee_system();
    let g = manual.g;
    for (target, other_a, other_b) in [(0usize, 1usize, 2usize), (1, 0, 2), (2, 0, 1)] {
        let a = manual.bodies[other_a];
        let b = manual.bodies[other_b];
        raw_step_body(&mut manual.bodies[target], &a, &b, dt, g);
    }

    // Identical operation sequence, so the results agree bit for bit
    for (s, m) in stepped.bodies.iter().zip(manual.bodies.iter()) {
        assert_eq!(s.position.x, m.position.x);
        assert_eq!(s.position.y, m.position.y);
        assert_eq!(s.velocity.x, m.velocity.x);
        assert_eq!(s.velocity.y, m.velocity.y);
    }
}

#[test]
fn test_first_body_golden_values_after_one_step() {
    let mut system = bumblebee_system();
    step(&mut system, 1e-4);

    // Body 0 starts at (-1, 0) with velocity (0.18428, 0.58719). Both
    // partners lie on the x-axis, so the initial acceleration is
    // (1/4 + 1/1, 0) = (1.25, 0) exactly:
    //   vx after half-kick = 0.18428 + 0.5 * 1.25 * 1e-4 = 0.1843425
    //   x after drift      = -1 + 0.1843425 * 1e-4     = -0.99998156575
    //   y after drift      = 0 + 0.58719 * 1e-4        = 0.000058719
    let body = system.bodies[0];
    assert!(approx_eq(body.position.x, -0.99998156575, 1e-12));
    assert!(approx_eq(body.position.y, 0.000058719, 1e-12));

    // The second half-kick uses forces at the drifted position
    assert!(approx_eq(body.velocity.x, 0.18440500, 1e-7));
    assert!(approx_eq(body.velocity.y, 0.58719, 1e-7));
}

#[test]
fn test_circular_pair_keeps_separation() {
    // Two unit masses at (±1, 0) separated by d = 2. A circular orbit about
    // the barycenter needs v² = G * m / (2 * d), giving v = 0.5. The third
    // slot is filled with a negligible far-away body so the pair dynamics
    // stay effectively two-body.
    let mut system = System::new([
        Body::new(1.0, DVec2::new(1.0, 0.0), DVec2::new(0.0, 0.5)),
        Body::new(1.0, DVec2::new(-1.0, 0.0), DVec2::new(0.0, -0.5)),
        Body::new(1e-9, DVec2::new(1e3, 1e3), DVec2::ZERO),
    ]);

    step_n(&mut system, 1e-4, 10_000);

    let d = separation(&system.bodies[0], &system.bodies[1]);
    assert!(approx_eq(d, 2.0, 2e-3), "separation drifted to {}", d);

    let speed = system.bodies[0].velocity.length();
    assert!(approx_eq(speed, 0.5, 2e-3), "speed drifted to {}", speed);
}

#[test]
fn test_time_reversal_returns_near_start() {
    let initial = bumblebee_system();
    let mut system = initial.clone();

    step_n(&mut system, 1e-4, 100);
    step_n(&mut system, -1e-4, 100);

    for (now, then) in system.bodies.iter().zip(initial.bodies.iter()) {
        assert!(approx_eq_vec(now.position, then.position, 1e-5));
        assert!(approx_eq_vec(now.velocity, then.velocity, 1e-5));
    }
}

/// Leapfrog where every body reads the same frozen snapshot of the others,
/// instead of seeing partners that already moved this step
fn step_snapshot(system: &mut System, dt: f64) {
    let g = system.g;
    let frozen = system.bodies;
    for (i, body) in system.bodies.iter_mut().enumerate() {
        let f: DVec2 = (0..3)
            .filter(|&j| j != i)
            .map(|j| raw_force(body, &frozen[j], g))
            .sum();
        body.acceleration = f / body.mass;
        body.velocity += 0.5 * body.acceleration * dt;
        body.position += body.velocity * dt;
    }
    let drifted = system.bodies;
    for (i, body) in system.bodies.iter_mut().enumerate() {
        let f: DVec2 = (0..3)
            .filter(|&j| j != i)
            .map(|j| raw_force(body, &drifted[j], g))
            .sum();
        body.acceleration = f / body.mass;
        body.velocity += 0.5 * body.acceleration * dt;
    }
}

#[test]
fn test_chained_updates_differ_from_snapshot_updates() {
    let mut chained = bumblebee_system();
    let mut snapshot = bumblebee_system();

    for _ in 0..20_000 {
        step(&mut chained, 1e-4);
        step_snapshot(&mut snapshot, 1e-4);
    }

    // The chained scheme feeds each body the partners' already-updated
    // positions, so the two trajectories must separate measurably
    let mut max_diff = 0.0f64;
    for (a, b) in chained.bodies.iter().zip(snapshot.bodies.iter()) {
        assert!(a.position.is_finite());
        assert!(b.position.is_finite());
        max_diff = max_diff.max(a.position.distance(b.position));
    }
    assert!(max_diff > 1e-6, "schemes stayed together: {}", max_diff);
}

#[test]
fn test_zero_dt_is_a_no_op() {
    let initial = bumblebee_system();
    let mut system = initial.clone();

    step(&mut system, 0.0);

    for (now, then) in system.bodies.iter().zip(initial.bodies.iter()) {
        assert_eq!(now.position.x, then.position.x);
        assert_eq!(now.position.y, then.position.y);
        assert_eq!(now.velocity.x, then.velocity.x);
        assert_eq!(now.velocity.y, then.velocity.y);
    }
}
