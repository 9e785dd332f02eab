//! Batch orchestrator.
//!
//! Per exercise, in catalog order:
//!
//! 1. reset the scene (a fresh [`SceneHandle`])
//! 2. resolve the asset; a missing asset is a skip
//! 3. import it; unsupported or unreadable assets are a skip
//! 4. classify the id and compute its target range
//! 5. retime the imported action onto the range, or synthesize an idle sway for holds
//! 6. render the three aspect jobs; the first render failure abandons the remaining jobs
//!
//! Nothing that goes wrong inside one exercise stops the batch. Only configuration problems
//! detected before the first exercise (bad timing values, duplicate ids, an output root that
//! cannot be created or written to) are returned as errors.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::animation::idle;
use crate::catalog::classify::{DurationClass, ExerciseClass, classify};
use crate::catalog::id::ExerciseId;
use crate::catalog::resolve::{AssetReference, discover_catalog, resolve};
use crate::engine::{SceneEngine, SceneHandle, SceneSetup};
use crate::foundation::core::TargetRange;
use crate::foundation::error::{RepcueError, RepcueResult, SkipKind};
use crate::pipeline::config::BatchConfig;
use crate::pipeline::report::BatchResult;
use crate::render::jobs::{RenderJob, expand_for};

/// Ordered list of exercise ids backed by asset files in one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    /// Directory holding `<id>.<ext>` assets.
    pub root: PathBuf,
    /// Ids in render order.
    pub ids: Vec<ExerciseId>,
}

impl Catalog {
    /// Catalog of explicit ids under `root`.
    pub fn new(root: impl Into<PathBuf>, ids: Vec<ExerciseId>) -> Self {
        Self {
            root: root.into(),
            ids,
        }
    }

    /// Catalog of every id with a supported asset under `root`, sorted.
    pub fn discover(root: impl Into<PathBuf>) -> RepcueResult<Self> {
        let root = root.into();
        let ids = discover_catalog(&root)?;
        Ok(Self { root, ids })
    }

    /// Keep only ids in `subset`, preserving catalog order.
    pub fn with_subset(mut self, subset: &BTreeSet<ExerciseId>) -> Self {
        self.ids.retain(|id| subset.contains(id));
        self
    }

    fn check_unique(&self) -> RepcueResult<()> {
        let mut seen = BTreeSet::new();
        for id in &self.ids {
            if !seen.insert(id) {
                return Err(RepcueError::validation(format!(
                    "exercise id '{id}' appears more than once in the catalog"
                )));
            }
        }
        Ok(())
    }
}

/// Where the final animation of an exercise came from.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationSource {
    /// The imported action, retimed by `scale`.
    Retimed {
        /// Name of the imported action.
        action: String,
        /// Target frames per source frame.
        scale: f64,
    },
    /// No action was imported; an idle sway was keyed on the rig.
    SynthesizedIdle,
    /// Nothing to animate; the scene renders as imported.
    Unanimated,
}

/// State of one exercise after its scene is fully set up, before any job renders.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedExercise {
    /// Exercise id.
    pub id: ExerciseId,
    /// Asset the scene was built from.
    pub asset: AssetReference,
    /// Duration and camera class.
    pub class: ExerciseClass,
    /// Timeline range set on the scene.
    pub range: TargetRange,
    /// Animation bound to the rig.
    pub animation: AnimationSource,
}

/// Timing and jobs an exercise would get, without touching the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExercisePlan {
    /// Exercise id.
    pub id: ExerciseId,
    /// Resolved asset path, or `None` when the exercise would be skipped.
    pub asset: Option<PathBuf>,
    /// Duration and camera class.
    pub class: ExerciseClass,
    /// Timeline range the exercise would render.
    pub range: TargetRange,
    /// Jobs in render order.
    pub jobs: Vec<RenderJob>,
}

/// Classification, timing and output paths for every catalog id.
pub fn plan(catalog: &Catalog, config: &BatchConfig) -> RepcueResult<Vec<ExercisePlan>> {
    config.validate()?;
    let durations = config.duration_settings()?;
    catalog
        .ids
        .iter()
        .map(|id| {
            let class = classify(id, &config.static_ids, &config.floor_ids);
            Ok(ExercisePlan {
                id: id.clone(),
                asset: resolve(&catalog.root, id).map(|a| a.resolved_path),
                class,
                range: durations.target_range(class.duration)?,
                jobs: expand_for(id, &config.output_root, config.container).to_vec(),
            })
        })
        .collect()
}

/// Run the whole catalog through `engine`, one exercise at a time.
#[tracing::instrument(skip_all, fields(root = %catalog.root.display(), ids = catalog.ids.len()))]
pub fn run(
    catalog: &Catalog,
    config: &BatchConfig,
    engine: &mut dyn SceneEngine,
) -> RepcueResult<BatchResult> {
    config.validate()?;
    catalog.check_unique()?;
    let setup = config.scene_setup()?;
    ensure_writable_root(&config.output_root)?;

    let mut result = BatchResult::default();
    for id in &catalog.ids {
        let span = tracing::info_span!("exercise", id = %id);
        let _guard = span.enter();

        match process_exercise(engine, &setup, &catalog.root, id, config) {
            Ok(outputs) => {
                tracing::info!(files = outputs.len(), "rendered");
                result.record_rendered(id.clone(), outputs);
            }
            Err((kind, err)) => {
                tracing::warn!(reason = %kind, error = %err, "skipped");
                result.record_skipped(id.clone(), kind, err.to_string());
            }
        }
    }

    tracing::info!(
        rendered = result.rendered.len(),
        skipped = result.skipped.len(),
        "batch finished"
    );
    Ok(result)
}

/// Name of the scratch file used to check that the output root accepts writes.
const WRITE_CHECK_FILE: &str = ".repcue-write-check";

/// Create `root` and check that files can be created in it.
fn ensure_writable_root(root: &Path) -> RepcueResult<()> {
    std::fs::create_dir_all(root).map_err(|e| {
        RepcueError::config(format!(
            "cannot create output root '{}': {e}",
            root.display()
        ))
    })?;
    let check = root.join(WRITE_CHECK_FILE);
    std::fs::File::create(&check).map_err(|e| {
        RepcueError::config(format!(
            "output root '{}' is not writable: {e}",
            root.display()
        ))
    })?;
    let _ = std::fs::remove_file(&check);
    Ok(())
}

fn process_exercise(
    engine: &mut dyn SceneEngine,
    setup: &SceneSetup,
    catalog_root: &Path,
    id: &ExerciseId,
    config: &BatchConfig,
) -> Result<Vec<PathBuf>, (SkipKind, RepcueError)> {
    let tag = |fallback: SkipKind| move |e: RepcueError| (e.skip_kind().unwrap_or(fallback), e);

    let mut scene =
        SceneHandle::fresh(engine, setup).map_err(tag(SkipKind::RenderEngineFailure))?;
    let prepared = prepare_exercise(&mut scene, catalog_root, id, config)
        .map_err(tag(SkipKind::ImportFailed))?;
    render_jobs(&mut scene, &prepared, config).map_err(tag(SkipKind::RenderEngineFailure))
}

/// Resolve, import, classify and animate one exercise in a freshly reset scene.
pub fn prepare_exercise(
    scene: &mut SceneHandle<'_>,
    catalog_root: &Path,
    id: &ExerciseId,
    config: &BatchConfig,
) -> RepcueResult<PreparedExercise> {
    let asset = resolve(catalog_root, id)
        .ok_or_else(|| RepcueError::asset_not_found(id.as_str(), catalog_root))?;
    tracing::debug!(
        path = %asset.resolved_path.display(),
        format = ?asset.format,
        "resolved asset"
    );

    let imported = scene.import_asset(&asset)?;
    let class = classify(id, &config.static_ids, &config.floor_ids);
    let range = config.duration_settings()?.target_range(class.duration)?;
    scene.set_frame_range(range)?;

    let animation = match imported.action {
        Some(action) => {
            let name = action.name.clone();
            let retimed = action.retime(range).ok_or_else(|| {
                RepcueError::animation(format!("action '{name}' has no keys to retime"))
            })?;
            scene.bind_action(imported.rig.as_deref(), retimed.action())?;
            AnimationSource::Retimed {
                action: name,
                scale: retimed.transform().scale,
            }
        }
        None => match (class.duration, imported.rig.as_deref()) {
            (DurationClass::StaticHold, Some(rig)) => {
                scene.bind_action(Some(rig), &idle::synthesize_action(id.as_str(), range))?;
                AnimationSource::SynthesizedIdle
            }
            _ => {
                tracing::warn!(class = ?class.duration, "no animation to apply");
                AnimationSource::Unanimated
            }
        },
    };

    Ok(PreparedExercise {
        id: id.clone(),
        asset,
        class,
        range,
        animation,
    })
}

/// Render the three aspect jobs of a prepared exercise, stopping at the first failure.
pub fn render_jobs(
    scene: &mut SceneHandle<'_>,
    prepared: &PreparedExercise,
    config: &BatchConfig,
) -> RepcueResult<Vec<PathBuf>> {
    let jobs = expand_for(&prepared.id, &config.output_root, config.container);
    if let Some(dir) = jobs[0].output_path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            RepcueError::render_engine(format!(
                "cannot create output directory '{}': {e}",
                dir.display()
            ))
        })?;
    }

    let mut outputs = Vec::with_capacity(jobs.len());
    for job in jobs {
        let (w, h) = job.aspect.resolution();
        scene.place_camera(prepared.class.camera)?;
        scene.set_output_resolution(w, h)?;
        scene.render_to_file(&job.output_path).map_err(|e| match e {
            RepcueError::RenderEngine(msg) => {
                RepcueError::render_engine(format!("{} job: {msg}", job.aspect.name()))
            }
            other => other,
        })?;
        tracing::info!(
            aspect = job.aspect.name(),
            path = %job.output_path.display(),
            "job done"
        );
        outputs.push(job.output_path);
    }
    Ok(outputs)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
