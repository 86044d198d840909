use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use scenery::{
    Deduped, LogLevel, LogPort as _, OriginState, TracingPort, Validator, compose_backgrounds,
    report_to_port,
};

#[derive(Parser, Debug)]
#[command(name = "scenery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a scene config and print the repaired document.
    Validate(ValidateArgs),
    /// Validate a scene config and print background placements for a size.
    Place(PlaceArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the repaired config.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Container width in pixels.
    #[arg(long)]
    width: f64,

    /// Container height in pixels.
    #[arg(long)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Place(args) => cmd_place(args),
    }
}

fn load_scene(in_path: &Path) -> anyhow::Result<scenery::ValidatedScene> {
    let bytes = std::fs::read(in_path)
        .with_context(|| format!("read scene config '{}'", in_path.display()))?;
    let raw: serde_json::Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse scene config '{}'", in_path.display()))?;

    let scene = Validator::default().validate_config(&raw);

    // Repeated identical repairs (shared prefixes across layers) collapse
    // to one line each on stderr.
    let mut port = Deduped::new(TracingPort);
    report_to_port(&scene.report, &mut port);
    if !scene.report.is_empty() {
        port.log(
            LogLevel::Info,
            &format!("validated with {} repair(s)", scene.report.len()),
        );
    }
    Ok(scene)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let out = if args.pretty {
        serde_json::to_string_pretty(&scene.config)?
    } else {
        serde_json::to_string(&scene.config)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let origin = OriginState::from_size(args.width, args.height);
    if origin.is_degenerate() {
        tracing::warn!(
            width = args.width,
            height = args.height,
            "degenerate container size; placements use the pre-layout frame"
        );
    }
    let placements = compose_backgrounds(&scene.config, origin);
    println!("{}", serde_json::to_string_pretty(&placements)?);
    Ok(())
}
