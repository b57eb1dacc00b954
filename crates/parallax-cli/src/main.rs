//! parallax - scroll-driven animation playground
//!
//! Drives the parallax-core utilities from a terminal:
//! - Reveal-on-scroll sections, counters and a marquee
//! - A sticky heading that grows, holds and shrinks with scroll progress
//! - A drag-to-scroll card strip with momentum

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use parallax_core::{paths, FrameLoop, ParallaxConfig};
use tokio_util::sync::CancellationToken;

mod commands;
mod tui;

/// parallax - scroll animation playground
#[derive(Parser)]
#[command(name = "parallax")]
#[command(
    about = "Scroll-driven reveal, sticky heading and momentum drag animations",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme name
    #[arg(short, long, default_value = "dusk")]
    theme: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive playground (default)
    Demo,

    /// List available themes
    Themes,

    /// Map a container position to the sticky heading style
    Sticky {
        /// Container top relative to the viewport (px, negative once scrolled past)
        #[arg(long, allow_hyphen_values = true)]
        top: f64,
        /// Container height (px)
        #[arg(long)]
        height: f64,
        /// Viewport height (px)
        #[arg(long)]
        viewport: f64,
    },

    /// Release a drag at a velocity and print the momentum coast
    Coast {
        /// Release velocity (px per frame)
        #[arg(long, allow_hyphen_values = true)]
        velocity: f64,
        /// Frames per second
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=1000))]
        fps: u32,
    },

    /// Run a count-up animation
    Count {
        #[arg(long)]
        target: u64,
        /// Defaults to the configured counter duration
        #[arg(long)]
        duration_ms: Option<u64>,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

fn init_logging() -> Result<()> {
    paths::ensure_logs_dir()?;
    let log_path = paths::log_file();
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Load the user config, falling back to defaults with a warning
fn load_config() -> (ParallaxConfig, Option<String>) {
    match ParallaxConfig::load() {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            (ParallaxConfig::default(), Some(format!("Config ignored: {}", e)))
        }
    }
}

/// Token cancelled on Ctrl+C outside raw mode
fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });
    token
}

fn frame_loop(fps: u32) -> FrameLoop {
    FrameLoop::new(Duration::from_secs_f64(1.0 / fps as f64))
}

#[tokio::main]
async fn main() -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Logs go to a file; stdout belongs to the TUI
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {:#}", e);
    }

    let cli = Cli::parse();
    let (config, config_warning) = load_config();

    match cli.command {
        None | Some(Commands::Demo) => {
            let theme = tui::THEME_REGISTRY.get_or_default(&cli.theme);
            tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

            let mut app = tui::App::new(config, &cli.theme, shutdown_token());
            if let Some(warning) = config_warning {
                app.show_toast(tui::components::Toast::warning(warning));
            }
            app.run().await?;
        }
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(command) => {
            if let Some(warning) = config_warning {
                eprintln!("warning: {}", warning);
            }
            run_headless(command, &config).await?;
        }
    }

    Ok(())
}

async fn run_headless(command: Commands, config: &ParallaxConfig) -> Result<()> {
    match command {
        Commands::Sticky {
            top,
            height,
            viewport,
        } => {
            println!("{}", commands::sticky(config, top, height, viewport));
        }
        Commands::Coast { velocity, fps } => {
            let token = shutdown_token();
            let report = commands::coast(config, velocity, &frame_loop(fps), &token).await;
            for frame in &report.frames {
                println!(
                    "{:>4}  offset {:>10.2}  velocity {:>+8.3}",
                    frame.index, frame.offset, frame.velocity
                );
            }
            let status = if report.outcome.was_cancelled() {
                "cancelled"
            } else {
                "settled"
            };
            println!(
                "{} after {} frames (closed form: {})",
                status,
                report.outcome.frames(),
                report.predicted
            );
        }
        Commands::Count {
            target,
            duration_ms,
        } => {
            let duration = duration_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.timing.counter_duration());
            let token = shutdown_token();
            let frames = FrameLoop::new(config.timing.frame_period());
            let (values, outcome) = commands::count(target, duration, &frames, &token).await;
            for value in &values {
                println!("{}", value);
            }
            if outcome.was_cancelled() {
                println!("cancelled after {} frames", outcome.frames());
            }
        }
        Commands::Config { init } => {
            let path = paths::config_file()?;
            let (config, written) = commands::show_config(&path, init)?;
            if written {
                println!("Wrote defaults to {}", path.display());
            }
            println!("# {}", path.display());
            print!("{}", config.to_toml()?);
        }
        Commands::Demo | Commands::Themes => {}
    }
    Ok(())
}
