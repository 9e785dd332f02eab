use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use repcue::{
    AspectProfile, BatchConfig, Catalog, ContainerFormat, ExerciseId, FrameIndex, PreviewEngine,
    RecordingEngine, SceneEngine, SceneHandle, SingleOverrides,
};

#[derive(Parser, Debug)]
#[command(name = "repcue", version, about = "Batch-render exercise clips in three aspect ratios")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every exercise in a catalog.
    Batch(BatchArgs),
    /// Render a single exercise, optionally overriding its classification.
    One(OneArgs),
    /// Print timing and output paths without rendering.
    Plan(PlanArgs),
    /// Render one preview frame as a PNG.
    Frame(FrameArgs),
}

/// Batch settings. Flags override values loaded from `--config`.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Batch config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    fps: Option<u32>,

    /// Seconds per loop for cyclic reps.
    #[arg(long)]
    seconds: Option<f64>,

    /// Seconds for static holds.
    #[arg(long)]
    static_seconds: Option<f64>,

    /// Comma-separated ids rendered as static holds. Replaces the config set.
    #[arg(long, value_delimiter = ',')]
    static_ids: Option<Vec<ExerciseId>>,

    /// Comma-separated ids framed with the floor camera. Replaces the config set.
    #[arg(long, value_delimiter = ',')]
    floor_ids: Option<Vec<ExerciseId>>,

    /// Output root directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Container format.
    #[arg(long)]
    format: Option<ContainerFormat>,
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Directory holding `<id>.<ext>` assets.
    #[arg(long, default_value = "assets")]
    src: PathBuf,

    /// Comma-separated ids, in render order. Defaults to every asset found in `--src`.
    #[arg(long, value_delimiter = ',')]
    ids: Vec<ExerciseId>,

    /// Only render these ids (catalog order is kept).
    #[arg(long, value_delimiter = ',')]
    subset: Vec<ExerciseId>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(flatten)]
    config: ConfigArgs,

    /// Drive a recording engine instead of encoding; nothing is written except directories.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Write the batch result as JSON to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct OneArgs {
    /// Directory holding `<id>.<ext>` assets.
    #[arg(long, default_value = "assets")]
    src: PathBuf,

    #[arg(long)]
    id: ExerciseId,

    /// Render as a static hold (`--static false` forces a cyclic rep).
    #[arg(long = "static", num_args = 0..=1, default_missing_value = "true")]
    is_static: Option<bool>,

    /// Use the floor camera (`--floor false` forces standing).
    #[arg(long = "floor", num_args = 0..=1, default_missing_value = "true")]
    is_floor: Option<bool>,

    #[command(flatten)]
    config: ConfigArgs,

    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the plan as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Directory holding `<id>.<ext>` assets.
    #[arg(long, default_value = "assets")]
    src: PathBuf,

    #[arg(long)]
    id: ExerciseId,

    #[arg(long, default_value = "square")]
    aspect: AspectProfile,

    /// Frame index inside the target range. Defaults to the first frame.
    #[arg(long)]
    frame: Option<u64>,

    /// Output PNG path.
    #[arg(long = "png")]
    png: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Batch(args) => cmd_batch(args),
        Command::One(args) => cmd_one(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

impl ConfigArgs {
    fn load(self) -> anyhow::Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display()))?,
            None => BatchConfig::default(),
        };
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(secs) = self.seconds {
            config.rep_seconds = secs;
        }
        if let Some(secs) = self.static_seconds {
            config.static_seconds = secs;
        }
        if let Some(ids) = self.static_ids {
            config.static_ids = ids.into_iter().collect();
        }
        if let Some(ids) = self.floor_ids {
            config.floor_ids = ids.into_iter().collect();
        }
        if let Some(out) = self.out {
            config.output_root = out;
        }
        if let Some(format) = self.format {
            config.container = format;
        }
        config.validate()?;
        Ok(config)
    }
}

impl CatalogArgs {
    fn load(self) -> anyhow::Result<Catalog> {
        let catalog = if self.ids.is_empty() {
            Catalog::discover(&self.src)
                .with_context(|| format!("discover assets in '{}'", self.src.display()))?
        } else {
            Catalog::new(self.src, self.ids)
        };
        if self.subset.is_empty() {
            return Ok(catalog);
        }
        Ok(catalog.with_subset(&self.subset.into_iter().collect()))
    }
}

fn engine_for(dry_run: bool) -> anyhow::Result<Box<dyn SceneEngine>> {
    if dry_run {
        return Ok(Box::new(RecordingEngine::new()));
    }
    if !repcue::encode::ffmpeg::is_ffmpeg_on_path() {
        anyhow::bail!("ffmpeg was not found on PATH (use --dry-run to plan without encoding)");
    }
    Ok(Box::new(PreviewEngine::default()))
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let catalog = args.catalog.load()?;
    let config = args.config.load()?;
    let mut engine = engine_for(args.dry_run)?;

    let result = repcue::run(&catalog, &config, engine.as_mut())?;
    eprint!("{result}");

    if let Some(path) = args.report {
        write_report(&path, &result.to_json_pretty()?)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_one(args: OneArgs) -> anyhow::Result<()> {
    let config = args.config.load()?;
    let overrides = SingleOverrides {
        is_static: args.is_static,
        is_floor: args.is_floor,
    };
    let mut engine = engine_for(args.dry_run)?;

    let outcome = repcue::run_single(&args.src, &args.id, &config, overrides, engine.as_mut())?;
    if !outcome.is_rendered() {
        anyhow::bail!(outcome.message);
    }
    eprintln!("{}", outcome.message);
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let catalog = args.catalog.load()?;
    let config = args.config.load()?;
    let plans = repcue::plan(&catalog, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }
    for p in &plans {
        let asset = p
            .asset
            .as_deref()
            .map_or_else(|| "MISSING".to_string(), |a| a.display().to_string());
        println!(
            "{} [{:?}, {:?}] frames {}..={} asset {asset}",
            p.id, p.class.duration, p.class.camera, p.range.start.0, p.range.end.0
        );
        for job in &p.jobs {
            println!("  {} -> {}", job.aspect, job.output_path.display());
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = args.config.load()?;
    let mut engine = PreviewEngine::default();

    let prepared = {
        let mut scene = SceneHandle::fresh(&mut engine, &config.scene_setup()?)?;
        let prepared = repcue::prepare_exercise(&mut scene, &args.src, &args.id, &config)?;
        let (w, h) = args.aspect.resolution();
        scene.place_camera(prepared.class.camera)?;
        scene.set_output_resolution(w, h)?;
        prepared
    };

    let frame = args.frame.unwrap_or(prepared.range.start.0);
    if frame < prepared.range.start.0 || frame > prepared.range.end.0 {
        anyhow::bail!(
            "frame {frame} is outside the target range {}..={}",
            prepared.range.start.0,
            prepared.range.end.0
        );
    }
    let rgba = engine.render_frame(FrameIndex(frame))?;

    if let Some(parent) = args.png.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.png,
        &rgba.data,
        rgba.width,
        rgba.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.png.display()))?;

    eprintln!("wrote {}", args.png.display());
    Ok(())
}

fn write_report(path: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create report dir '{}'", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("write report '{}'", path.display()))
}
