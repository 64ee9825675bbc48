use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "storyframe",
    version,
    about = "Place images on story-sized canvases with rounded corners"
)]
struct Cli {
    /// Input images. Each is written to `<name>-story.png` beside it.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Canvas background.
    #[arg(long, value_enum)]
    background: Option<BackgroundChoice>,

    /// Vertical anchor of the image: top, center, bottom (or 1, 2, 3).
    #[arg(long, value_parser = parse_placement)]
    placement: Option<storyframe::PlacementMode>,

    /// Corner radius in pixels.
    #[arg(long)]
    radius: Option<u32>,

    /// Process files in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackgroundChoice {
    Dark,
    Light,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let threading = storyframe::BatchThreading {
        parallel: cli.parallel,
        threads: cli.threads,
    };

    let report = storyframe::process_files(&config, &cli.files, &threading)?;
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(out) => eprintln!("wrote {}", out.display()),
            Err(e) => eprintln!("failed {}: {e}", outcome.input.display()),
        }
    }

    if !report.all_ok() {
        anyhow::bail!(
            "{} of {} file(s) failed",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(())
}

fn parse_placement(s: &str) -> Result<storyframe::PlacementMode, storyframe::StoryError> {
    s.parse()
}

fn build_config(cli: &Cli) -> anyhow::Result<storyframe::StoryConfig> {
    let mut config = match &cli.config {
        Some(path) => storyframe::StoryConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => storyframe::StoryConfig::default(),
    };

    if let Some(w) = cli.width {
        config.canvas.width = w;
    }
    if let Some(h) = cli.height {
        config.canvas.height = h;
    }
    if let Some(bg) = cli.background {
        config.background = match bg {
            BackgroundChoice::Dark => storyframe::BackgroundTone::Dark,
            BackgroundChoice::Light => storyframe::BackgroundTone::Light,
        };
    }
    if let Some(p) = cli.placement {
        config.placement = p;
    }
    if let Some(r) = cli.radius {
        config.corner_radius = r;
    }

    config.validate().context("validate config")?;
    tracing::debug!(?config, "resolved config");
    Ok(config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
