//! Built-in initial conditions for the three-body system
//!
//! Each scenario bundles a body triple with a suggested viewport extent.
//! The velocity pairs of the periodic presets come from the Šuvakov &
//! Dmitrašinović catalog of planar three-body orbits (arXiv:1303.0181);
//! the rest are hand-picked chaotic or hierarchical arrangements.

use crate::engine::{Body, System};
use glam::DVec2;
use thiserror::Error;

/// Errors from scenario lookup and body-spec parsing
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("body spec '{0}' must have 5 comma-separated fields: mass,x,y,vx,vy")]
    MalformedBodySpec(String),

    #[error("invalid number '{value}' in body spec: {source}")]
    InvalidNumber {
        value: String,
        source: std::num::ParseFloatError,
    },

    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f64),
}

/// A named initial-condition triple
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub summary: &'static str,
    pub bodies: [Body; 3],
    /// Suggested half-width of the square viewport when drawing the run
    pub extent: f64,
}

impl Scenario {
    /// All built-in scenarios, in listing order
    pub fn all() -> Vec<Scenario> {
        vec![
            bumblebee(),
            yin_yang(),
            goggles(),
            circle(),
            chaos_1(),
            chaos_2(),
            satellite(),
            heavy_center(),
            fast_movers(),
        ]
    }

    /// Look up a built-in scenario by its exact name
    pub fn by_name(name: &str) -> Result<Scenario, ScenarioError> {
        Scenario::all()
            .into_iter()
            .find(|scenario| scenario.name == name)
            .ok_or_else(|| ScenarioError::UnknownScenario(name.to_string()))
    }

    /// Wrap caller-supplied bodies in a scenario record
    pub fn custom(bodies: [Body; 3]) -> Scenario {
        let reach = bodies
            .iter()
            .map(|b| b.position.x.abs().max(b.position.y.abs()))
            .fold(0.0f64, f64::max);
        Scenario {
            name: "custom",
            summary: "caller-supplied bodies",
            bodies,
            extent: (1.5 * reach).max(1.5),
        }
    }

    /// Fresh system state for this scenario
    pub fn system(&self) -> System {
        System::new(self.bodies)
    }
}

/// Parse a `mass,x,y,vx,vy` body spec
///
/// Rejects non-positive masses here, at the configuration boundary, so the
/// integration core itself never has to check.
pub fn parse_body(spec: &str) -> Result<Body, ScenarioError> {
    let fields: Vec<&str> = spec.split(',').map(|s| s.trim()).collect();
    if fields.len() != 5 {
        return Err(ScenarioError::MalformedBodySpec(spec.to_string()));
    }

    let mut values = [0.0f64; 5];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse().map_err(|source| ScenarioError::InvalidNumber {
            value: (*field).to_string(),
            source,
        })?;
    }

    let [mass, x, y, vx, vy] = values;
    if mass <= 0.0 {
        return Err(ScenarioError::NonPositiveMass(mass));
    }

    Ok(Body::new(mass, DVec2::new(x, y), DVec2::new(vx, vy)))
}

/// The collinear launch shared by the periodic presets: unit masses at
/// (±1, 0) with equal velocity (vx, vy) and a third at the origin moving at
/// (−2vx, −2vy), so the total momentum vanishes
fn collinear_family(vx: f64, vy: f64) -> [Body; 3] {
    [
        Body::new(1.0, DVec2::new(-1.0, 0.0), DVec2::new(vx, vy)),
        Body::new(1.0, DVec2::new(1.0, 0.0), DVec2::new(vx, vy)),
        Body::new(1.0, DVec2::new(0.0, 0.0), DVec2::new(-2.0 * vx, -2.0 * vy)),
    ]
}

/// I.A.3 "bumblebee": high-period figure-eight relative
fn bumblebee() -> Scenario {
    Scenario {
        name: "bumblebee",
        summary: "high-period periodic orbit from the figure-eight family",
        bodies: collinear_family(0.18428, 0.58719),
        extent: 1.5,
    }
}

/// II.C.2a "yin-yang I"
fn yin_yang() -> Scenario {
    Scenario {
        name: "yin-yang",
        summary: "yin-yang I periodic orbit",
        bodies: collinear_family(0.51394, 0.30474),
        extent: 1.5,
    }
}

/// I.B.5 "goggles"
fn goggles() -> Scenario {
    Scenario {
        name: "goggles",
        summary: "goggles periodic orbit",
        bodies: collinear_family(0.08330, 0.12789),
        extent: 1.5,
    }
}

/// Equilateral triangle on the unit circle with tangential speed 0.7,
/// slightly below the circular-rotation speed, so the triangle breathes
fn circle() -> Scenario {
    let s = 0.7;
    let root3_half = 3.0f64.sqrt() / 2.0;
    Scenario {
        name: "circle",
        summary: "equal masses on an equilateral triangle, near-circular rotation",
        bodies: [
            Body::new(1.0, DVec2::new(1.0, 0.0), DVec2::new(0.0, s)),
            Body::new(
                1.0,
                DVec2::new(-0.5, root3_half),
                DVec2::new(s * -root3_half, s * -0.5),
            ),
            Body::new(
                1.0,
                DVec2::new(-0.5, -root3_half),
                DVec2::new(s * root3_half, s * -0.5),
            ),
        ],
        extent: 1.5,
    }
}

fn chaos_1() -> Scenario {
    Scenario {
        name: "chaos-1",
        summary: "equal masses launched into a chaotic tangle",
        bodies: [
            Body::new(1.0, DVec2::new(0.5, 0.0), DVec2::new(1.0, 1.0)),
            Body::new(1.0, DVec2::new(1.0, 0.1), DVec2::new(-0.3, -0.2)),
            Body::new(1.0, DVec2::new(-0.5, -1.0), DVec2::new(-0.5, 0.5)),
        ],
        extent: 2.0,
    }
}

fn chaos_2() -> Scenario {
    Scenario {
        name: "chaos-2",
        summary: "second chaotic equal-mass arrangement",
        bodies: [
            Body::new(1.0, DVec2::new(0.5, 0.0), DVec2::new(0.7, 0.4)),
            Body::new(1.0, DVec2::new(-0.5, 0.1), DVec2::new(0.4, -0.6)),
            Body::new(1.0, DVec2::new(0.5, -0.9), DVec2::new(0.8, -0.6)),
        ],
        extent: 2.0,
    }
}

fn satellite() -> Scenario {
    Scenario {
        name: "satellite",
        summary: "unequal masses with a light outlying body",
        bodies: [
            Body::new(1.0, DVec2::new(0.5, 0.0), DVec2::new(1.0, 0.2)),
            Body::new(1.5, DVec2::new(0.3, 0.1), DVec2::new(-0.5, -0.5)),
            Body::new(0.5, DVec2::new(-0.2, -1.3), DVec2::new(-0.4, 0.5)),
        ],
        extent: 2.0,
    }
}

fn heavy_center() -> Scenario {
    Scenario {
        name: "heavy-center",
        summary: "mass-100 anchor at rest with two unit masses in opposing orbits",
        bodies: [
            Body::new(100.0, DVec2::new(0.0, 0.0), DVec2::new(0.0, 0.0)),
            Body::new(1.0, DVec2::new(-2.0, 0.0), DVec2::new(0.0, 5.0)),
            Body::new(1.0, DVec2::new(2.0, 0.0), DVec2::new(0.0, -5.0)),
        ],
        extent: 2.5,
    }
}

fn fast_movers() -> Scenario {
    Scenario {
        name: "fast-movers",
        summary: "tiny fast bodies streaking past a unit mass",
        bodies: [
            Body::new(1.0, DVec2::new(-1.0, -1.0), DVec2::new(0.01, 0.01)),
            Body::new(0.01, DVec2::new(0.5, 0.5), DVec2::new(1.0, -1.0)),
            Body::new(0.0001, DVec2::new(0.45, 0.45), DVec2::new(3.0, 0.0)),
        ],
        extent: 3.0,
    }
}
