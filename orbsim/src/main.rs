use orbsim::configuration::config::ephemerides_from_config;
use orbsim::{bench_advance, iso_date, ControlInput, Engine, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, long, default_value = "solar_system.yaml")]
    file: String,

    /// Frames (and steps) per real second; overrides the scenario
    #[arg(long)]
    fps: Option<i64>,

    /// Number of asteroids; overrides the scenario
    #[arg(long)]
    asteroids: Option<usize>,

    /// Seed for a reproducible belt; overrides the scenario
    #[arg(long)]
    seed: Option<u64>,

    /// Steps to run headless
    #[arg(long, default_value_t = 600)]
    steps: u64,

    /// Time `advance` for growing belts instead of running
    #[arg(long)]
    bench: bool,

    /// Open the 3D viewer (needs the `viewer` feature)
    #[arg(long)]
    view: bool,
}

// load here to keep main clean
fn load_scenario_config(args: &Args) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file);
    let mut cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    if let Some(fps) = args.fps {
        let clamped = fps.clamp(1, u32::MAX as i64) as u32;
        if clamped as i64 != fps {
            warn!("fps {fps} out of range, using {clamped}");
        }
        cfg.engine.fps = Some(clamped);
    }
    if let Some(n) = args.asteroids {
        cfg.parameters.asteroid_count = Some(n);
    }
    if args.seed.is_some() {
        cfg.parameters.seed = args.seed;
    }

    Ok(cfg)
}

fn run_headless(mut scenario: Scenario, steps: u64) {
    let report_every = (steps / 10).max(1);
    for step in 1..=steps {
        scenario.step(&ControlInput::IDLE);
        if step % report_every == 0 {
            info!(
                "step {step}/{steps}: {} (t = {:.3e} s)",
                iso_date(scenario.system.time_total()),
                scenario.system.time_total()
            );
        }
    }

    let sys = &scenario.system;
    println!(
        "{} bodies advanced {} steps to {}",
        sys.body_count(),
        steps,
        iso_date(sys.time_total())
    );
    for (i, b) in sys.bodies().iter().take(sys.massive_body_count()).enumerate() {
        let name = b.name.map(|t| t.as_str().to_string()).unwrap_or_else(|| format!("#{i}"));
        println!(
            "{name:>10}  r = {:.4e} m  |v| = {:.4e} m/s",
            (b.position - sys.bodies()[0].position).norm(),
            b.velocity.norm()
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let cfg = load_scenario_config(&args)?;

    if args.bench {
        let engine: Engine = cfg.engine.to_engine()?;
        let params = cfg.parameters.to_parameters()?;
        let ephemerides = ephemerides_from_config(&cfg.bodies)?;
        bench_advance(&ephemerides, &params, engine.time_step());
        return Ok(());
    }

    let scenario = Scenario::build_scenario(&cfg).context("failed to build scenario")?;

    if args.view {
        #[cfg(feature = "viewer")]
        {
            orbsim::run_viewer(scenario);
            return Ok(());
        }
        #[cfg(not(feature = "viewer"))]
        warn!("built without the `viewer` feature, running headless");
    }

    run_headless(scenario, args.steps);
    Ok(())
}
