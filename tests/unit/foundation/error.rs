use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RepcueError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RepcueError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        RepcueError::render_engine("x")
            .to_string()
            .contains("render engine failure:")
    );
    assert!(
        RepcueError::asset_not_found("plank", "/assets")
            .to_string()
            .contains("asset not found for 'plank'")
    );
}

#[test]
fn unsupported_format_records_lowercase_extension() {
    let err = RepcueError::unsupported_format("/assets/squats.FBX");
    match err {
        RepcueError::UnsupportedFormat { ext, .. } => assert_eq!(ext, "fbx"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn per_exercise_errors_map_to_skip_kinds() {
    assert_eq!(
        RepcueError::asset_not_found("a", "r").skip_kind(),
        Some(SkipKind::AssetNotFound)
    );
    assert_eq!(
        RepcueError::unsupported_format("a.obj").skip_kind(),
        Some(SkipKind::UnsupportedFormat)
    );
    assert_eq!(
        RepcueError::import("bad json").skip_kind(),
        Some(SkipKind::ImportFailed)
    );
    assert_eq!(
        RepcueError::render_engine("ffmpeg died").skip_kind(),
        Some(SkipKind::RenderEngineFailure)
    );
}

#[test]
fn batch_fatal_errors_have_no_skip_kind() {
    assert_eq!(RepcueError::config("read-only").skip_kind(), None);
    assert_eq!(RepcueError::validation("fps").skip_kind(), None);
    let other = RepcueError::Other(anyhow::anyhow!("boom"));
    assert_eq!(other.skip_kind(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RepcueError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
