// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "quantum-cams")]
#[command(about = "Headless security-camera and decoy simulation", long_about = None)]
pub struct Cli {
    /// Level description (JSON); the built-in demo level when absent
    #[arg(long)]
    pub level: Option<PathBuf>,

    /// Seed for decoy relocation and disturbance timing
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Simulated seconds to run
    #[arg(long, default_value_t = 120.0)]
    pub duration: f32,

    /// Simulation steps per second
    #[arg(long, default_value_t = 60.0, value_parser = parse_hz)]
    pub hz: f32,

    /// Pace the simulation to wall-clock time
    #[arg(long)]
    pub realtime: bool,

    /// Do not let the auto-player shoot
    #[arg(long = "no-bot")]
    pub no_bot: bool,

    /// Use the analytic box/cone test instead of the projected circle
    #[arg(long)]
    pub analytic: bool,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

fn parse_hz(s: &str) -> Result<f32, String> {
    let hz: f32 = s.parse().map_err(|e| format!("{}", e))?;
    if hz > 0.0 && hz.is_finite() {
        Ok(hz)
    } else {
        Err(format!("rate must be positive, got {}", hz))
    }
}
