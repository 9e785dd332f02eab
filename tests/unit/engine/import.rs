use super::*;
use crate::catalog::id::ExerciseId;
use std::path::PathBuf;

const SQUAT: &str = r#"
{
  "rig": "Armature",
  "action": {
    "name": "Squat",
    "curves": [
      { "data_path": "location", "index": 2,
        "keys": [ { "time": 10, "value": 0.0 }, { "time": 40, "value": -0.4 }, { "time": 70, "value": 0.0 } ] },
      { "data_path": "rotation_euler", "index": 0,
        "keys": [ { "time": 10, "value": 0.0, "interpolation": "linear" } ] }
    ]
  }
}
"#;

#[test]
fn reads_rig_action_and_curves() {
    let asset = read_motion_clip(SQUAT.as_bytes()).unwrap();
    assert_eq!(asset.rig.as_deref(), Some("Armature"));
    let action = asset.action.unwrap();
    assert_eq!(action.name, "Squat");
    assert_eq!(action.curves.len(), 2);
    assert_eq!(action.curves[0].keyframes.len(), 3);
    assert_eq!(action.source_range(), Some(SourceRange::new(10.0, 70.0)));
}

#[test]
fn rig_without_action_imports_with_no_animation() {
    let asset = read_motion_clip(r#"{ "rig": "Armature" }"#.as_bytes()).unwrap();
    assert_eq!(asset.rig.as_deref(), Some("Armature"));
    assert!(asset.action.is_none());
}

#[test]
fn keyless_action_is_dropped() {
    let json = r#"{ "rig": "Armature", "action": { "name": "Empty", "curves": [ { "data_path": "location" } ] } }"#;
    let asset = read_motion_clip(json.as_bytes()).unwrap();
    assert!(asset.action.is_none());
}

#[test]
fn authored_frame_range_is_kept() {
    let json = r#"{ "action": { "name": "A", "frame_range": { "first_frame": 1, "last_frame": 48 },
        "curves": [ { "data_path": "location", "keys": [ { "time": 5, "value": 0 } ] } ] } }"#;
    let action = read_motion_clip(json.as_bytes()).unwrap().action.unwrap();
    assert_eq!(action.source_range(), Some(SourceRange::new(1.0, 48.0)));
}

#[test]
fn malformed_json_is_an_import_error() {
    let err = read_motion_clip("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, RepcueError::Import(_)));
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(read_motion_clip(r#"{ "rigg": "Armature" }"#.as_bytes()).is_err());
}

#[test]
fn backwards_keys_fail_validation() {
    let json = r#"{ "action": { "name": "A", "curves": [ { "data_path": "location",
        "keys": [ { "time": 5, "value": 0 }, { "time": 1, "value": 1 } ] } ] } }"#;
    let err = read_motion_clip(json.as_bytes()).unwrap_err();
    assert!(matches!(err, RepcueError::Animation(_)));
}

#[test]
fn interchange_formats_are_unsupported_natively() {
    let asset = AssetReference {
        exercise_id: ExerciseId::new("squats").unwrap(),
        resolved_path: PathBuf::from("assets/squats.fbx"),
        format: AssetFormat::Fbx,
    };
    match import_native(&asset).unwrap_err() {
        RepcueError::UnsupportedFormat { ext, .. } => assert_eq!(ext, "fbx"),
        other => panic!("unexpected {other:?}"),
    }
}
