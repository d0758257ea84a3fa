//! Interactive orbit viewer
//!
//! Draws the three bodies and their trails in a square viewport sized by
//! the scenario's extent, with play/pause/step controls and live
//! conserved-quantity readouts.

use eframe::egui;
use threebody_core::diagnostics::{total_energy, total_momentum};
use threebody_core::{
    build_simulation_context, get_body_states, step_simulation, Scenario, SimulationContext,
};

/// Fill colors for bodies 0, 1, 2
const BODY_COLORS: [egui::Color32; 3] = [
    egui::Color32::LIGHT_BLUE,
    egui::Color32::from_rgb(220, 60, 50),
    egui::Color32::from_rgb(60, 180, 75),
];

/// Record a trail point once every this many steps
const TRAIL_STRIDE: u64 = 25;

pub struct OrbitApp {
    scenario: Scenario,
    dt: f64,
    total_time: f64,
    ctx: SimulationContext,
    /// Trail history per body, in world coordinates
    trails: [Vec<egui::Pos2>; 3],
    playing: bool,
    steps_per_frame: u32,
}

impl OrbitApp {
    pub fn new(
        scenario: Scenario,
        dt: f64,
        total_time: f64,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let ctx = build_simulation_context(&scenario, dt, total_time);
        let mut app = Self {
            scenario,
            dt,
            total_time,
            ctx,
            trails: [Vec::new(), Vec::new(), Vec::new()],
            playing: false,
            steps_per_frame: 2_000,
        };
        app.record_trail_point();
        app
    }

    fn reset(&mut self) {
        self.ctx = build_simulation_context(&self.scenario, self.dt, self.total_time);
        for trail in &mut self.trails {
            trail.clear();
        }
        self.record_trail_point();
        self.playing = false;
    }

    fn record_trail_point(&mut self) {
        let states = get_body_states(&self.ctx);
        for (trail, state) in self.trails.iter_mut().zip(states.iter()) {
            trail.push(egui::pos2(state.position.x as f32, state.position.y as f32));
        }
    }

    /// Advance up to `steps` steps, recording trail points on the stride.
    /// Returns true once the step budget is spent.
    fn advance(&mut self, steps: u32) -> bool {
        for _ in 0..steps {
            let was_finished = self.ctx.current_step >= self.ctx.max_steps;
            if step_simulation(&mut self.ctx) {
                if !was_finished {
                    self.record_trail_point();
                }
                return true;
            }
            if self.ctx.current_step % TRAIL_STRIDE == 0 {
                self.record_trail_point();
            }
        }
        false
    }
}

impl eframe::App for OrbitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                    .clicked()
                {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }

                if ui.button("⏭ Step").clicked() {
                    self.advance(1);
                }

                ui.separator();

                ui.label("Steps/frame:");
                ui.add(egui::Slider::new(&mut self.steps_per_frame, 1..=20_000).logarithmic(true));

                ui.separator();

                ui.label(format!(
                    "{}  t = {:.3}  step {} / {}",
                    self.scenario.name,
                    self.ctx.current_step as f64 * self.ctx.dt,
                    self.ctx.current_step,
                    self.ctx.max_steps
                ));
            });
        });

        egui::TopBottomPanel::bottom("diagnostics").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("E = {:+.6}", total_energy(&self.ctx.system)));
                ui.separator();
                ui.label(format!(
                    "|P| = {:.3e}",
                    total_momentum(&self.ctx.system).length()
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter();

            // Map world coordinates onto the viewport, y pointing up
            let world_range = (2.0 * self.scenario.extent) as f32;
            let center = rect.center();
            let scale = (rect.width().min(rect.height()) / world_range) * 0.9;
            let to_screen =
                |p: egui::Pos2| center + egui::vec2(p.x * scale, -p.y * scale);

            for (trail, color) in self.trails.iter().zip(BODY_COLORS) {
                for point in trail {
                    painter.circle_filled(to_screen(*point), 1.0, color);
                }
            }

            let states = get_body_states(&self.ctx);
            for (i, state) in states.iter().enumerate() {
                let screen_pos = to_screen(egui::pos2(
                    state.position.x as f32,
                    state.position.y as f32,
                ));

                // Radius from mass, bounded so tiny and huge bodies stay visible
                let radius = ((state.mass.sqrt() * 4.0) as f32).max(3.0).min(12.0);

                painter.circle_filled(screen_pos, radius, BODY_COLORS[i]);
                painter.circle_stroke(
                    screen_pos,
                    radius,
                    egui::Stroke::new(1.0, egui::Color32::WHITE),
                );
                painter.text(
                    screen_pos + egui::vec2(0.0, radius + 10.0),
                    egui::Align2::CENTER_TOP,
                    format!("{}", i),
                    egui::FontId::default(),
                    egui::Color32::WHITE,
                );
            }
        });

        if self.playing {
            if self.advance(self.steps_per_frame) {
                self.playing = false;
            }
            ctx.request_repaint();
        }
    }
}
