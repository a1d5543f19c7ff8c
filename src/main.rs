use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use video_dreamifier::{
    config::Config,
    encoder::{self, DreamParams, FilterParams},
    error::DreamifierError,
};

#[derive(Parser)]
#[command(
    name = "video-dreamifier",
    version,
    about = "Prepare a blurred, slowed-down background video.",
    long_about = "Video-Dreamifier runs ffmpeg with motion interpolation, a slowdown, a gaussian blur and a downscale to turn any clip into a soft background loop."
)]
struct Cli {
    /// Input video file
    input: PathBuf,

    /// Output video file (e.g., output.webm)
    output: PathBuf,

    /// Start time (e.g., 00:00:10)
    #[arg(long)]
    start: Option<String>,

    /// End time (e.g., 00:00:25)
    #[arg(long)]
    end: Option<String>,

    /// Slowdown factor (4.0 = quarter speed) [default: 4.0]
    #[arg(long)]
    slow: Option<f64>,

    /// Gaussian blur sigma value [default: 12.0]
    #[arg(long)]
    blur: Option<f64>,

    /// Output width (height auto-scaled) [default: 854]
    #[arg(long)]
    width: Option<u32>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Encoder program to run instead of the configured one
    #[arg(long, value_name = "PROGRAM")]
    ffmpeg: Option<String>,

    /// Print the command without running it
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = execute(cli) {
        let (message, code) = match err.downcast_ref::<DreamifierError>() {
            Some(e) => (e.user_message(), e.exit_code()),
            None => (format!("{:#}", err), 1),
        };
        debug!("{:?}", err);
        eprintln!("Error: {}", message);
        std::process::exit(code);
    }
}

fn execute(cli: Cli) -> Result<()> {
    debug!("Starting Video-Dreamifier v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };
    if let Some(program) = cli.ffmpeg {
        config.encoder.program = program;
    }
    config.validate().context("invalid configuration")?;

    let params = DreamParams {
        input: cli.input,
        output: cli.output,
        start: cli.start,
        end: cli.end,
        filter: FilterParams {
            slow: cli.slow.unwrap_or(config.defaults.slow),
            blur: cli.blur.unwrap_or(config.defaults.blur),
            width: cli.width.unwrap_or(config.defaults.width),
        },
    };
    params.validate()?;

    encoder::validate_input(&params.input)?;

    let spec = encoder::build_command(&params, &config.encoder);

    println!("Running FFmpeg:");
    println!("{}", spec);

    if cli.dry_run {
        info!("Dry run, not starting {}", spec.program());
        return Ok(());
    }

    let code = encoder::run(&spec)?;
    encoder::check_exit_code(code)?;

    info!("Done! Output saved to: {:?}", params.output);
    Ok(())
}
