use clap::{Parser, Subcommand};
use threebody_core::diagnostics::{total_energy, total_momentum};
use threebody_core::{
    build_simulation_context, get_body_states, parse_body, step_simulation, Scenario,
    SimulationContext,
};

mod orbit_app;

#[derive(Parser)]
#[command(name = "threebody")]
#[command(about = "Three-body gravitational integrator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in scenarios
    List,
    /// Integrate a scenario and print a run summary
    Run {
        /// Scenario name (see `list`)
        scenario: String,
        /// Fixed integration time step
        #[arg(long, default_value_t = 1e-4)]
        dt: f64,
        /// Total simulated time span
        #[arg(long, default_value_t = 100.0)]
        total_time: f64,
        /// Print a position sample every N steps
        #[arg(long)]
        sample_every: Option<u64>,
        /// Replace the scenario's bodies: three `mass,x,y,vx,vy` specs
        #[arg(long = "body")]
        bodies: Vec<String>,
    },
    /// Watch a scenario evolve in a window
    View {
        /// Scenario name (see `list`)
        scenario: String,
        /// Fixed integration time step
        #[arg(long, default_value_t = 1e-4)]
        dt: f64,
        /// Total simulated time span
        #[arg(long, default_value_t = 100.0)]
        total_time: f64,
        /// Replace the scenario's bodies: three `mass,x,y,vx,vy` specs
        #[arg(long = "body")]
        bodies: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List => {
            list_command();
            Ok(())
        }
        Commands::Run {
            scenario,
            dt,
            total_time,
            sample_every,
            bodies,
        } => run_command(&scenario, dt, total_time, sample_every, &bodies),
        Commands::View {
            scenario,
            dt,
            total_time,
            bodies,
        } => view_command(&scenario, dt, total_time, &bodies),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn list_command() {
    for scenario in Scenario::all() {
        println!("{:<14} {}", scenario.name, scenario.summary);
    }
}

/// Pick the named scenario, or build a custom one when three `--body`
/// specs are given
fn resolve_scenario(name: &str, specs: &[String]) -> Result<Scenario, Box<dyn std::error::Error>> {
    if specs.is_empty() {
        return Ok(Scenario::by_name(name)?);
    }
    if specs.len() != 3 {
        return Err(format!("expected exactly 3 --body specs, got {}", specs.len()).into());
    }
    let bodies = [
        parse_body(&specs[0])?,
        parse_body(&specs[1])?,
        parse_body(&specs[2])?,
    ];
    Ok(Scenario::custom(bodies))
}

fn validate_timing(dt: f64, total_time: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !(dt > 0.0 && dt.is_finite()) {
        return Err(format!("--dt must be a positive finite number, got {}", dt).into());
    }
    if !(total_time > 0.0 && total_time.is_finite()) {
        return Err(format!("--total-time must be a positive finite number, got {}", total_time).into());
    }
    Ok(())
}

fn run_command(
    name: &str,
    dt: f64,
    total_time: f64,
    sample_every: Option<u64>,
    specs: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    validate_timing(dt, total_time)?;
    if sample_every == Some(0) {
        return Err("--sample-every must be positive".into());
    }

    let scenario = resolve_scenario(name, specs)?;
    let mut ctx = build_simulation_context(&scenario, dt, total_time);

    let initial_momentum = total_momentum(&ctx.system);
    let initial_energy = total_energy(&ctx.system);

    if sample_every.is_some() {
        println!("# t x0 y0 x1 y1 x2 y2");
        print_sample(&ctx);
    }
    while !step_simulation(&mut ctx) {
        if let Some(every) = sample_every {
            if ctx.current_step % every == 0 {
                print_sample(&ctx);
            }
        }
    }
    // The loop exits on the step that spends the budget, so the final
    // state still needs its row
    if sample_every.is_some() && ctx.max_steps > 0 {
        print_sample(&ctx);
    }

    println!("scenario: {}", scenario.name);
    println!(
        "steps: {}  simulated time: {}",
        ctx.max_steps,
        ctx.max_steps as f64 * dt
    );
    for (i, state) in get_body_states(&ctx).iter().enumerate() {
        println!(
            "  body {}: pos ({:+.6}, {:+.6})  vel ({:+.6}, {:+.6})",
            i, state.position.x, state.position.y, state.velocity.x, state.velocity.y
        );
    }

    let momentum_drift = (total_momentum(&ctx.system) - initial_momentum).length();
    println!("momentum drift: {:.3e}", momentum_drift);
    let energy_drift = total_energy(&ctx.system) - initial_energy;
    if initial_energy != 0.0 {
        println!(
            "relative energy drift: {:.3e}",
            (energy_drift / initial_energy).abs()
        );
    } else {
        println!("energy drift: {:.3e}", energy_drift.abs());
    }

    Ok(())
}

fn print_sample(ctx: &SimulationContext) {
    let t = ctx.current_step as f64 * ctx.dt;
    let states = get_body_states(ctx);
    println!(
        "{:.6} {:+.9} {:+.9} {:+.9} {:+.9} {:+.9} {:+.9}",
        t,
        states[0].position.x,
        states[0].position.y,
        states[1].position.x,
        states[1].position.y,
        states[2].position.x,
        states[2].position.y
    );
}

fn view_command(
    name: &str,
    dt: f64,
    total_time: f64,
    specs: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    validate_timing(dt, total_time)?;
    let scenario = resolve_scenario(name, specs)?;

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([900.0, 900.0])
            .with_title(format!("threebody - {}", scenario.name)),
        ..Default::default()
    };
    eframe::run_native(
        "threebody",
        options,
        Box::new(move |cc| Ok(Box::new(orbit_app::OrbitApp::new(scenario, dt, total_time, cc)))),
    )?;

    Ok(())
}
