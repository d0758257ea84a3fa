use crate::engine::System;
use crate::integrator::step;
use crate::scenario::{Scenario, ScenarioError};
use glam::DVec2;

/// A running simulation: the evolving system plus its step budget
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub system: System,
    pub dt: f64,
    pub current_step: u64,
    pub max_steps: u64,
}

/// Snapshot of one body for callers that only read state
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    pub mass: f64,
    pub position: DVec2,
    pub velocity: DVec2,
}

/// Set up a simulation of `scenario` covering `total_time` in steps of `dt`
///
/// The step budget is `total_time / dt` truncated toward zero, so the run
/// never overshoots the requested span.
pub fn build_simulation_context(scenario: &Scenario, dt: f64, total_time: f64) -> SimulationContext {
    SimulationContext {
        system: scenario.system(),
        dt,
        current_step: 0,
        max_steps: (total_time / dt) as u64,
    }
}

/// Look up a built-in scenario and set up a simulation of it
pub fn build_simulation_context_by_name(
    name: &str,
    dt: f64,
    total_time: f64,
) -> Result<SimulationContext, ScenarioError> {
    let scenario = Scenario::by_name(name)?;
    Ok(build_simulation_context(&scenario, dt, total_time))
}

/// Advance the simulation by one step, unless the budget is spent
///
/// Returns true once `current_step` has reached `max_steps`. Calls after
/// that point leave the system untouched and keep returning true.
pub fn step_simulation(ctx: &mut SimulationContext) -> bool {
    if ctx.current_step >= ctx.max_steps {
        return true;
    }
    step(&mut ctx.system, ctx.dt);
    ctx.current_step += 1;
    ctx.current_step >= ctx.max_steps
}

/// Read-only snapshot of all three bodies
pub fn get_body_states(ctx: &SimulationContext) -> [BodyState; 3] {
    ctx.system.bodies.map(|body| BodyState {
        mass: body.mass,
        position: body.position,
        velocity: body.velocity,
    })
}
