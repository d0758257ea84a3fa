pub mod diagnostics;
pub mod engine;
pub mod integrator;
pub mod runtime;
pub mod scenario;

pub use engine::{gravitational_force, Body, System, G};
pub use integrator::{step, step_body};
pub use runtime::{
    build_simulation_context, build_simulation_context_by_name, get_body_states, step_simulation,
    BodyState, SimulationContext,
};
pub use scenario::{parse_body, Scenario, ScenarioError};
