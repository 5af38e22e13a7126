use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "snapmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the logo to a PNG file.
    Render(RenderArgs),
    /// Print the logo display list as JSON.
    Scene(SceneArgs),
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pixels per design unit (the canvas is 40 * scale pixels wide).
    #[arg(long)]
    scale: Option<u32>,

    /// Base color as #rrggbb or r,g,b.
    #[arg(long)]
    color: Option<snapmark::Rgb8>,

    /// How stroke end caps are blended.
    #[arg(long, value_enum)]
    caps: Option<CapsChoice>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    style: StyleArgs,

    /// Output PNG path.
    #[arg(long, default_value = "public/snapagent-logo.png")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CapsChoice {
    Overdraw,
    Single,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn load_config(args: &StyleArgs) -> anyhow::Result<snapmark::LogoConfig> {
    let mut cfg = match &args.config {
        Some(path) => snapmark::LogoConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => snapmark::LogoConfig::default(),
    };
    if let Some(scale) = args.scale {
        cfg.scale = scale;
    }
    if let Some(color) = args.color {
        cfg.color = color;
    }
    if let Some(caps) = args.caps {
        cfg.caps = match caps {
            CapsChoice::Overdraw => snapmark::CapMode::Overdraw,
            CapsChoice::Single => snapmark::CapMode::Single,
        };
    }
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.style)?;
    let written = snapmark::export_logo_png(&cfg, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    println!("PNG saved to: {}", written.display());
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.style)?;
    let scene = snapmark::build_logo_scene(&cfg)?;
    let stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(stdout, &scene).context("serialize display list")?;
    println!();
    Ok(())
}
