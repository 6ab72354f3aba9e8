// ABOUTME: Main application entry point.
// ABOUTME: Replays a command script against a tree session and writes the final frame.

mod script;
mod session;

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ntree_core::Config;
use ntree_render::SvgSink;
use script::parse_script;
use session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Json,
}

/// Build a bounded-arity tree from a command script and render its radial layout
#[derive(Parser, Debug)]
#[command(name = "ntree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command script (default: stdin)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Where to write the frame (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Config file (default: ~/.config/ntree/config.toml, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn read_script(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

fn main() -> Result<()> {
    // Frames go to stdout, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("Starting ntree");

    let config = load_config(cli.config.as_ref())?;
    let source = read_script(cli.script.as_ref())?;
    let commands = parse_script(&source)?;

    let mut session = Session::new(&config);
    for command in commands {
        session.apply(command);
    }
    tracing::info!(
        "Script finished: {} nodes, next level {}",
        session.tree().len(),
        session.fields().level
    );
    if let Some(status) = session.status() {
        tracing::warn!("{}", status);
    }
    if let Some(trace) = session.search() {
        tracing::info!("Last search: {:?}", trace.outcome);
    }

    let scene = session.scene();
    let rendered = match cli.format {
        Format::Svg => SvgSink::render(&scene, config.palette.clone()),
        Format::Json => scene.to_json()?,
    };

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write to stdout")?,
    }

    Ok(())
}
