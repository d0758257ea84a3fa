use crate::engine::{gravitational_force, Body, System};

/// Fixed processing order for one full step: (target, other_a, other_b).
/// Body 0 advances first against 1 and 2, then body 1, then body 2.
const STEP_ORDER: [(usize, usize, usize); 3] = [(0, 1, 2), (1, 0, 2), (2, 0, 1)];

/// Advance one body by `dt` with a kick-drift-kick leapfrog update, holding
/// the other two bodies fixed
///
/// Both force evaluations see `other1`/`other2` exactly as passed: the first
/// pair at the body's pre-step position, the second pair after the drift.
/// The stored acceleration ends up as the post-drift force over mass.
pub fn step_body(body: &mut Body, other1: &Body, other2: &Body, dt: f64, g: f64) {
    // Forces at the current positions
    let f1 = gravitational_force(body, other1, g);
    let f2 = gravitational_force(body, other2, g);
    body.acceleration = (f1 + f2) / body.mass;

    // Half-kick, then drift on the half-kicked velocity
    body.velocity += 0.5 * body.acceleration * dt;
    body.position += body.velocity * dt;

    // Forces again at the drifted position; the other two have not moved
    let f1 = gravitational_force(body, other1, g);
    let f2 = gravitational_force(body, other2, g);
    body.acceleration = (f1 + f2) / body.mass;

    // Second half-kick completes the velocity update
    body.velocity += 0.5 * body.acceleration * dt;
}

/// Advance the whole system by one step of `dt`
///
/// Three chained single-body updates in the fixed `STEP_ORDER`, not one
/// symmetric update of the whole system: each target is advanced in place,
/// so later targets see the already-updated positions of earlier ones. The
/// chaotic scenarios are sensitive to exactly this ordering, so the loop
/// must stay sequential and in table order.
pub fn step(system: &mut System, dt: f64) {
    let g = system.g;
    for (target, other_a, other_b) in STEP_ORDER {
        let other_a = system.bodies[other_a];
        let other_b = system.bodies[other_b];
        step_body(&mut system.bodies[target], &other_a, &other_b, dt, g);
    }
}
