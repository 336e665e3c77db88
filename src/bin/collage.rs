use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "collage", version)]
struct Cli {
    /// Log debug diagnostics to stderr (overridden by `RUST_LOG`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump the builtin patterns as a collage document.
    Patterns(PatternsArgs),
    /// Print the mask style descriptor of one layer as JSON.
    Style(StyleArgs),
    /// Rasterize one layer's mask coverage into a grayscale PNG.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct PatternsArgs {
    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// Input collage document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layer id.
    #[arg(long)]
    layer: String,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input collage document JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Layer id.
    #[arg(long)]
    layer: String,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 360)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Patterns(args) => cmd_patterns(args),
        Command::Style(args) => cmd_style(args),
        Command::Preview(args) => cmd_preview(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_document(path: &Path) -> anyhow::Result<collage::CollageDocument> {
    let doc = collage::CollageDocument::load(path)?;
    doc.validate()
        .with_context(|| format!("validate collage document '{}'", path.display()))?;
    Ok(doc)
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        println!("{text}");
        return Ok(());
    };
    ensure_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_patterns(args: PatternsArgs) -> anyhow::Result<()> {
    let doc = collage::CollageDocument::with_builtin_patterns();
    write_output(args.out.as_deref(), &doc.to_json_pretty()?)
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let style = doc.mask_style(&args.layer)?;
    let json = serde_json::to_string_pretty(&style).context("serialize mask style")?;
    write_output(args.out.as_deref(), &json)
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let doc = read_document(&args.in_path)?;
    let style = doc.mask_style(&args.layer)?;
    let canvas = collage::Canvas::new(args.width, args.height)?;
    let coverage = collage::rasterize_coverage(&style, canvas)?;
    tracing::info!(
        layer = %args.layer,
        instances = style.len(),
        covered = coverage.covered_pixels(),
        "rasterized mask coverage"
    );

    ensure_parent(&args.out)?;
    coverage.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
