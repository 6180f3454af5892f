use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "boxtween", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a transition listing from two snapshot files.
    Generate(GenerateArgs),
    /// Generate a transition described by a JSON job file.
    Run(RunArgs),
    /// Print the interpolated state of all layers at one frame as JSON.
    Frame(FrameArgs),
    /// Re-emit a snapshot as a normalized four-layer listing.
    Snapshot(SnapshotArgs),
    /// List the available easing curves by category.
    Easings,
}

#[derive(Args, Debug)]
struct PairArgs {
    /// Command listing of the starting arrangement.
    #[arg(long)]
    initial: PathBuf,

    /// Command listing of the ending arrangement.
    #[arg(long = "final")]
    target: PathBuf,

    /// Transition length in frames.
    #[arg(long, allow_negative_numbers = true)]
    frames: i64,

    /// Easing curve name (unknown names fall back to linear).
    #[arg(long, default_value = "linear")]
    easing: String,

    /// Reject malformed records and unknown easing names.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    pair: PairArgs,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    pair: PairArgs,

    /// Frame index (0 = initial arrangement).
    #[arg(long)]
    frame: u32,
}

#[derive(Args, Debug)]
struct SnapshotArgs {
    /// Input command listing.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Reject malformed records.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Run(args) => cmd_run(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Snapshot(args) => cmd_snapshot(args),
        Command::Easings => cmd_easings(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_snapshot(path: &Path, strict: bool) -> anyhow::Result<boxtween::Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read snapshot '{}'", path.display()))?;
    if strict {
        boxtween::parse_snapshot_strict(&text)
            .with_context(|| format!("parse snapshot '{}'", path.display()))
    } else {
        Ok(boxtween::parse_snapshot(&text))
    }
}

fn build_transition(pair: &PairArgs) -> anyhow::Result<boxtween::Transition> {
    // Reject the duration before touching any file.
    let duration = boxtween::FrameCount::new(pair.frames)?;
    let ease = if pair.strict {
        pair.easing.parse::<boxtween::Ease>()?
    } else {
        boxtween::Ease::lookup(&pair.easing)
    };
    let initial = read_snapshot(&pair.initial, pair.strict)?;
    let target = read_snapshot(&pair.target, pair.strict)?;
    Ok(boxtween::Transition::new(&initial, &target, duration, ease)
        .with_easing_name(&pair.easing))
}

fn write_output(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        println!("{text}");
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn log_summary(tr: &boxtween::Transition) {
    let summary = tr.summary();
    tracing::info!(
        frames = summary.frames,
        easing = %summary.easing,
        participating = ?summary.participating,
        "transition ready"
    );
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let tr = build_transition(&args.pair)?;
    log_summary(&tr);
    write_output(args.out.as_deref(), &boxtween::emit_transition(&tr))
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let job = boxtween::TransitionJob::from_path(&args.in_path)?;
    let base_dir = args
        .in_path
        .parent()
        .unwrap_or_else(|| Path::new("."));
    let tr = job.build(base_dir)?;
    log_summary(&tr);
    write_output(args.out.as_deref(), &boxtween::emit_transition(&tr))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let tr = build_transition(&args.pair)?;
    let states = tr.frame_states(args.frame);
    let json = serde_json::to_string_pretty(&states).context("serialize frame states")?;
    println!("{json}");
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let snap = read_snapshot(&args.in_path, args.strict)?;
    tracing::info!(layers = snap.len(), "snapshot parsed");
    write_output(args.out.as_deref(), &boxtween::emit_snapshot(&snap.padded()))
}

fn cmd_easings() -> anyhow::Result<()> {
    for category in boxtween::EaseCategory::ALL {
        println!("{}: {}", category.name(), category.members().join(", "));
    }
    Ok(())
}
