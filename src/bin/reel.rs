use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reel", version)]
struct Cli {
    /// JSON file with configuration overrides.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene and transition table.
    Timeline,
    /// Write one frame's visual tree as JSON.
    Frame(FrameArgs),
    /// Write a range of frames as JSON lines.
    Render(RenderArgs),
    /// Write the frame-0 tree and its artifact manifest.
    Thumbnail(ThumbnailArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output JSON-lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the end of the timeline when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct ThumbnailArgs {
    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(cli.config.as_deref())?;
    let timeline = reel::Timeline::build(&cfg).context("build timeline")?;

    match cli.cmd {
        Command::Timeline => cmd_timeline(&timeline),
        Command::Frame(args) => cmd_frame(&timeline, args),
        Command::Render(args) => cmd_render(&timeline, args),
        Command::Thumbnail(args) => cmd_thumbnail(&timeline, args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<reel::ReelConfig> {
    let Some(path) = path else {
        return Ok(reel::ReelConfig::default());
    };
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    reel::ReelConfig::from_reader(f).with_context(|| format!("load config '{}'", path.display()))
}

fn cmd_timeline(timeline: &reel::Timeline) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{} frames @ {}/{} fps, {}x{}",
        timeline.total_frames(),
        timeline.fps().num,
        timeline.fps().den,
        timeline.canvas().width,
        timeline.canvas().height
    )?;
    for span in timeline.segments() {
        let what = match span.from {
            Some(from) => format!("{} -> {}", from.name(), span.scene.name()),
            None => span.scene.name().to_owned(),
        };
        writeln!(
            out,
            "{:>5}..{:<5} {}",
            span.range.start.0, span.range.end.0, what
        )?;
    }
    Ok(())
}

fn cmd_frame(timeline: &reel::Timeline, args: FrameArgs) -> anyhow::Result<()> {
    let frame = reel::render_frame(timeline, reel::FrameIndex(args.frame))
        .with_context(|| format!("render frame {}", args.frame))?;
    match args.out {
        Some(path) => {
            write_json(&path, &frame)?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &frame)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_render(timeline: &reel::Timeline, args: RenderArgs) -> anyhow::Result<()> {
    let end = args.end.unwrap_or(timeline.total_frames());
    let range = reel::FrameRange::new(reel::FrameIndex(args.start), reel::FrameIndex(end))?;
    let threading = reel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    create_parent_dir(&args.out)?;
    let file = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut sink = reel::JsonLinesSink::new(BufWriter::new(file));
    let stats = reel::render_to_sink(timeline, range, &threading, &mut sink)
        .with_context(|| format!("render frames {}..{}", range.start.0, range.end.0))?;

    eprintln!(
        "wrote {} ({} frames, {} artifacts)",
        args.out.display(),
        stats.frames_rendered,
        stats.artifacts
    );
    Ok(())
}

fn cmd_thumbnail(timeline: &reel::Timeline, args: ThumbnailArgs) -> anyhow::Result<()> {
    let frame = reel::render_frame(timeline, reel::FrameIndex(0)).context("render frame 0")?;
    write_json(&args.out, &frame)?;
    for a in &frame.artifacts {
        eprintln!("artifact {:?}: {}", a.kind, a.filename);
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> anyhow::Result<()> {
    create_parent_dir(path)?;
    let file =
        File::create(path).with_context(|| format!("create output '{}'", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, value)
        .with_context(|| format!("write json '{}'", path.display()))?;
    w.flush()?;
    Ok(())
}

fn create_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
