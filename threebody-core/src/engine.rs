use glam::DVec2;

/// Normalization constant for the gravitational force law
///
/// The dynamics run in dimensionless units, so this stays 1.0. It is named
/// (and threaded through [`System`]) so tests can rescale the force law
/// without touching the stepping code.
pub const G: f64 = 1.0;

/// One point mass in the three-body system
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub mass: f64,
    pub position: DVec2,
    pub velocity: DVec2,
    /// Cache of the most recent force evaluation, not meaningful input
    pub acceleration: DVec2,
}

impl Body {
    /// Create a body with the given initial state and zero acceleration
    pub fn new(mass: f64, position: DVec2, velocity: DVec2) -> Self {
        Self {
            mass,
            position,
            velocity,
            acceleration: DVec2::ZERO,
        }
    }
}

/// The three-body state advanced by the integrator
///
/// Owns exactly three bodies plus the force-law constant. The bodies are
/// created once before the run and then only mutated in place by the step
/// functions. Masses must stay positive and positions pairwise distinct;
/// coincident bodies make the force law divide by zero.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: [Body; 3],
    pub g: f64,
}

impl System {
    pub fn new(bodies: [Body; 3]) -> Self {
        Self { bodies, g: G }
    }
}

/// Gravitational force on `a` due to `b`
///
/// `g * a.mass * b.mass * d / r³` with `d = b.position - a.position`, the
/// inverse-square law with the direction normalization folded into the cubed
/// distance. Pure function of its inputs. Undefined for coincident
/// positions: the division then produces non-finite components that corrupt
/// every later step, so callers must keep separations nonzero.
pub fn gravitational_force(a: &Body, b: &Body, g: f64) -> DVec2 {
    let d = b.position - a.position;
    let r = d.length();
    let r_cubed = r * r * r;
    g * a.mass * b.mass * d / r_cubed
}
