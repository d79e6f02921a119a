//! Tessera demo - renders a small animated dashboard.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tessera::prelude::*;

/// Tessera demo
#[derive(Parser)]
#[command(name = "tessera-demo")]
#[command(about = "Render a sample dashboard with Tessera's delta renderer")]
#[command(version)]
struct Args {
    /// Renderer configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Number of frames to render
    #[arg(long, default_value_t = 20)]
    frames: u32,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Render into memory at the given size and print the last frame
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    headless: Option<String>,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_size(input: &str) -> anyhow::Result<(u16, u16)> {
    let (width, height) = input
        .split_once(['x', 'X'])
        .with_context(|| format!("expected WIDTHxHEIGHT, got '{input}'"))?;
    let width = width.trim().parse::<u16>().context("invalid width")?;
    let height = height.trim().parse::<u16>().context("invalid height")?;
    Ok((width, height))
}

fn dashboard(frame: u32, total: u32) -> Node {
    let done = u16::try_from(frame * 20 / total.max(1)).unwrap_or(20);
    let bar = format!("{}{}", "█".repeat(usize::from(done)), "░".repeat(usize::from(20 - done)));

    Node::column()
        .border(BorderStyle::Round)
        .border_color(Color::BLUE)
        .padding(Edges::axes(0, 1))
        .gap(1)
        .child(
            Node::row()
                .child(Node::text("Tessera").bold().color(Color::CYAN))
                .child(Node::spacer())
                .child(Node::text(format!("frame {}/{}", frame + 1, total)).dim()),
        )
        .child(
            Node::row()
                .gap(1)
                .child(Node::text("progress"))
                .child(Node::text(bar).color(Color::GREEN)),
        )
        .child(
            Node::text("Only the cells that change between frames are written to the terminal.")
                .italic()
                .wrap(WrapMode::Truncate(Truncation::End)),
        )
}

fn run_headless(config: RendererConfig, args: &Args, size: (u16, u16)) -> anyhow::Result<()> {
    let mut renderer = DeltaRenderer::new(MemorySink::with_size(size.0, size.1), config)?;
    for frame in 0..args.frames {
        renderer.render(dashboard(frame, args.frames))?;
    }
    println!("{}", renderer.front().serialize(false));
    info!(stats = %renderer.stats(), "headless run finished");
    renderer.cleanup()?;
    Ok(())
}

fn run_terminal(config: RendererConfig, args: &Args) -> anyhow::Result<()> {
    let mut renderer = DeltaRenderer::new(TerminalSink::stdout(), config)?;
    renderer.clear()?;
    for frame in 0..args.frames {
        renderer.render(dashboard(frame, args.frames))?;
        thread::sleep(Duration::from_millis(args.interval_ms));
    }
    renderer.cleanup()?;
    println!();
    info!(stats = %renderer.stats(), "run finished");
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => RendererConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => RendererConfig::default(),
    };

    match &args.headless {
        Some(size) => run_headless(config, args, parse_size(size)?),
        None => run_terminal(config, args),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("tessera-demo: {err:#}");
            ExitCode::FAILURE
        }
    }
}
