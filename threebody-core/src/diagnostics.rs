//! Conserved-quantity diagnostics for the three-body system
//!
//! The leapfrog scheme does not conserve these exactly, but their drift is
//! the standard health check for a run: momentum and energy should stay
//! near their initial values over moderate spans.

use crate::engine::System;
use glam::DVec2;

/// Total linear momentum, sum of m·v over the bodies
pub fn total_momentum(system: &System) -> DVec2 {
    system.bodies.iter().map(|b| b.mass * b.velocity).sum()
}

/// Total angular momentum about the origin (z-component of r × mv)
pub fn total_angular_momentum(system: &System) -> f64 {
    system
        .bodies
        .iter()
        .map(|b| b.mass * b.position.perp_dot(b.velocity))
        .sum()
}

/// Total kinetic energy, sum of ½·m·|v|²
pub fn kinetic_energy(system: &System) -> f64 {
    system
        .bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.length_squared())
        .sum()
}

/// Total gravitational potential energy over the three pairs
pub fn potential_energy(system: &System) -> f64 {
    let mut potential = 0.0;
    for i in 0..system.bodies.len() {
        for j in (i + 1)..system.bodies.len() {
            let a = &system.bodies[i];
            let b = &system.bodies[j];
            potential -= system.g * a.mass * b.mass / a.position.distance(b.position);
        }
    }
    potential
}

/// Kinetic plus potential energy
pub fn total_energy(system: &System) -> f64 {
    kinetic_energy(system) + potential_energy(system)
}

/// Mass-weighted mean position
pub fn center_of_mass(system: &System) -> DVec2 {
    let total_mass: f64 = system.bodies.iter().map(|b| b.mass).sum();
    let weighted: DVec2 = system.bodies.iter().map(|b| b.mass * b.position).sum();
    weighted / total_mass
}
