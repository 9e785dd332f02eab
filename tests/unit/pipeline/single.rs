use super::*;
use crate::catalog::classify::CameraClass;
use crate::engine::recording::{EngineCall, RecordingEngine};
use crate::foundation::core::{FrameIndex, TargetRange};
use crate::foundation::error::SkipKind;

fn scratch(name: &str) -> (std::path::PathBuf, BatchConfig) {
    let base = std::path::PathBuf::from("target").join("unit_single").join(name);
    let _ = std::fs::remove_dir_all(&base);
    let assets = base.join("assets");
    std::fs::create_dir_all(&assets).unwrap();
    let config = BatchConfig {
        output_root: base.join("videos"),
        ..BatchConfig::default()
    };
    (assets, config)
}

#[test]
fn renders_one_id_with_feedback() {
    let (assets, config) = scratch("rendered");
    std::fs::write(assets.join("squats.json"), r#"{ "rig": "Armature" }"#).unwrap();
    let id = ExerciseId::new("squats").unwrap();

    let mut engine = RecordingEngine::new();
    let outcome = run_single(&assets, &id, &config, SingleOverrides::default(), &mut engine)
        .unwrap();

    assert!(outcome.is_rendered());
    assert_eq!(outcome.message, "Rendered all three aspect ratios for 'squats'.");
    assert_eq!(engine.rendered_paths().len(), 3);
}

#[test]
fn overrides_switch_duration_and_camera() {
    let (assets, config) = scratch("overrides");
    std::fs::write(assets.join("plank.json"), r#"{ "rig": "Armature" }"#).unwrap();
    let id = ExerciseId::new("plank").unwrap();
    let overrides = SingleOverrides {
        is_static: Some(true),
        is_floor: Some(true),
    };

    let mut engine = RecordingEngine::new();
    run_single(&assets, &id, &config, overrides, &mut engine).unwrap();

    let hold = TargetRange::new(FrameIndex(1), FrameIndex(300)).unwrap();
    assert!(engine.calls().contains(&EngineCall::SetFrameRange(hold)));
    assert!(
        engine
            .calls()
            .contains(&EngineCall::PlaceCamera(CameraClass::Floor))
    );
    assert!(config.static_ids.is_empty());
}

#[test]
fn override_false_removes_configured_membership() {
    let (assets, mut config) = scratch("override_false");
    std::fs::write(assets.join("plank.json"), r#"{ "rig": "Armature" }"#).unwrap();
    let id = ExerciseId::new("plank").unwrap();
    config.static_ids.insert(id.clone());
    let overrides = SingleOverrides {
        is_static: Some(false),
        is_floor: None,
    };

    let mut engine = RecordingEngine::new();
    run_single(&assets, &id, &config, overrides, &mut engine).unwrap();

    let rep = TargetRange::new(FrameIndex(1), FrameIndex(66)).unwrap();
    assert!(engine.calls().contains(&EngineCall::SetFrameRange(rep)));
}

#[test]
fn missing_asset_is_reported_not_raised() {
    let (assets, config) = scratch("missing");
    let id = ExerciseId::new("burpees").unwrap();

    let outcome = run_single(
        &assets,
        &id,
        &config,
        SingleOverrides::default(),
        &mut RecordingEngine::new(),
    )
    .unwrap();

    assert!(!outcome.is_rendered());
    assert_eq!(outcome.result.skipped[0].kind, SkipKind::AssetNotFound);
    assert!(outcome.message.starts_with("Skipped 'burpees' (AssetNotFound)"));
}
