use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use relume::{
    Canvas, DispatchParams, RenderThreading, SourceImage, Stage, Vec2, VizMode, draw,
};

#[derive(Parser, Debug)]
#[command(name = "relume", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upscale an image to a target resolution.
    Upscale(UpscaleArgs),
    /// Run a draw described by a job JSON file.
    Job(JobArgs),
}

#[derive(Parser, Debug)]
struct UpscaleArgs {
    /// Input image path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Output width in pixels.
    #[arg(long)]
    width: u32,

    /// Output height in pixels.
    #[arg(long)]
    height: u32,

    /// Per-pixel stage to run.
    #[arg(long, value_enum, default_value_t = FilterChoice::Lanczos)]
    filter: FilterChoice,

    /// Visualization mode (debug filter only).
    #[arg(long, value_enum, default_value_t = VizChoice::Rgb)]
    viz: VizChoice,

    /// Active-region fraction of the source holding valid content, in (0, 1].
    #[arg(long, default_value_t = 1.0)]
    region: f32,

    /// Worker thread count (defaults to all cores).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct JobArgs {
    /// Input job JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Lanczos,
    Passthrough,
    Debug,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VizChoice {
    Rgb,
    Depth,
    Motion,
    Mask,
}

impl From<VizChoice> for VizMode {
    fn from(v: VizChoice) -> Self {
        match v {
            VizChoice::Rgb => VizMode::Rgb,
            VizChoice::Depth => VizMode::DepthGray,
            VizChoice::Motion => VizMode::MotionRg,
            VizChoice::Mask => VizMode::MaskGray,
        }
    }
}

/// A complete draw description, loadable from JSON.
#[derive(Debug, serde::Deserialize)]
struct Job {
    input: PathBuf,
    output: PathBuf,
    canvas: Canvas,
    params: DispatchParams,
    #[serde(default)]
    threading: RenderThreading,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Upscale(args) => cmd_upscale(args),
        Command::Job(args) => cmd_job(args),
    }
}

fn load_source(path: &Path) -> anyhow::Result<SourceImage> {
    let img = image::open(path)
        .with_context(|| format!("open input image '{}'", path.display()))?
        .to_rgba8();
    Ok(SourceImage::from_rgba8(&img))
}

fn run_draw(
    src: &SourceImage,
    params: &DispatchParams,
    canvas: Canvas,
    threading: &RenderThreading,
    out: &Path,
) -> anyhow::Result<()> {
    let frame = draw(src, params, canvas, threading)?;
    frame
        .to_rgba8()
        .save(out)
        .with_context(|| format!("write output image '{}'", out.display()))?;
    println!(
        "wrote {} ({}x{}, {:?})",
        out.display(),
        canvas.width,
        canvas.height,
        params.stage
    );
    Ok(())
}

fn cmd_upscale(args: UpscaleArgs) -> anyhow::Result<()> {
    let src = load_source(&args.in_path)?;
    let stage = match args.filter {
        FilterChoice::Lanczos => Stage::LanczosResample,
        FilterChoice::Passthrough => Stage::Passthrough,
        FilterChoice::Debug => Stage::DebugView {
            mode: args.viz.into(),
        },
    };
    let params = DispatchParams::new(stage, Vec2::splat(args.region), src.size())?;
    let canvas = Canvas::new(args.width, args.height)?;
    let threading = RenderThreading {
        threads: args.threads,
    };
    run_draw(&src, &params, canvas, &threading, &args.out)
}

fn cmd_job(args: JobArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open job '{}'", args.in_path.display()))?;
    let job: Job = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse job '{}'", args.in_path.display()))?;

    let src = load_source(&job.input)?;
    run_draw(&src, &job.params, job.canvas, &job.threading, &job.output)
}
