use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stipple", version)]
struct Cli {
    /// Log setup and per-frame diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame at a given time as a PNG.
    Frame(FrameArgs),
    /// Run the frame loop and write a numbered PNG sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation time in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    t_ms: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames to write.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Timestamp of the first frame in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    start_ms: f64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Render frames on a thread pool instead of driving the frame loop.
    #[arg(long)]
    parallel: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: &Path) -> anyhow::Result<stipple::Scene> {
    let config = stipple::SceneConfig::load(path)?;
    config
        .validate()
        .with_context(|| format!("validate scene '{}'", path.display()))?;
    let assets_root = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(stipple::Scene::prepare(&config, assets_root)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let (frame, stats) = stipple::Animator::render_frame_with_stats(&scene, args.t_ms);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    stipple::write_png(&args.out, &frame)?;

    eprintln!(
        "wrote {} ({} particles drawn, {} off-canvas)",
        args.out.display(),
        stats.drawn,
        stats.skipped
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = load_scene(&args.in_path)?;
    let mut surface = stipple::PngSequenceSurface::create(&args.out_dir)?;

    if args.parallel {
        let count = usize::try_from(args.frames).context("frame count does not fit usize")?;
        let times = stipple::frame_times(args.start_ms, args.fps, count)?;
        let threading = stipple::RenderThreading {
            parallel: true,
            threads: None,
        };
        let (frames, _) = stipple::render_timeline(&scene, &times, &threading)?;
        for frame in &frames {
            stipple::RenderSurface::put_frame(&mut surface, frame)?;
        }
    } else {
        let mut scheduler = stipple::FixedStepScheduler::new(args.start_ms, args.fps)?;
        let mut frame_loop = stipple::FrameLoop::new(&scene);
        frame_loop.start(&mut scheduler)?;
        scheduler.run(&mut frame_loop, &mut surface, args.frames)?;
        frame_loop.stop();
    }

    eprintln!(
        "wrote {} frames to {}",
        surface.written(),
        args.out_dir.display()
    );
    Ok(())
}
