use super::*;
use crate::animation::idle;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::Fps;
use crate::render::jobs::ContainerFormat;

fn setup() -> SceneSetup {
    SceneSetup {
        fps: Fps::integer(30).unwrap(),
        container: ContainerFormat::Mp4,
    }
}

fn range(end: u64) -> TargetRange {
    TargetRange::new(FrameIndex(1), FrameIndex(end)).unwrap()
}

#[test]
fn render_into_streams_every_frame_of_the_range() {
    let mut engine = PreviewEngine::default();
    engine.reset_scene(&setup()).unwrap();
    engine.set_output_resolution(64, 36).unwrap();
    engine.set_frame_range(range(12)).unwrap();
    engine
        .bind_action(Some("Armature"), &idle::synthesize_action("plank", range(12)))
        .unwrap();

    let mut sink = InMemorySink::new();
    let count = engine.render_into(&mut sink).unwrap();

    assert_eq!(count, 12);
    assert!(sink.is_finished());
    assert_eq!(
        sink.config(),
        Some(&SinkConfig {
            width: 64,
            height: 36,
            fps: Fps::integer(30).unwrap(),
        })
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (1..=12).collect::<Vec<_>>());
}

#[test]
fn rendering_without_a_frame_range_is_an_engine_error() {
    let mut engine = PreviewEngine::default();
    engine.reset_scene(&setup()).unwrap();
    engine.set_output_resolution(64, 36).unwrap();
    let err = engine.render_frame(FrameIndex(1)).unwrap_err();
    assert!(matches!(err, RepcueError::RenderEngine(_)));
}

#[test]
fn reset_discards_previous_exercise_state() {
    let mut engine = PreviewEngine::default();
    engine.reset_scene(&setup()).unwrap();
    engine.set_output_resolution(64, 36).unwrap();
    engine.set_frame_range(range(4)).unwrap();
    assert!(engine.render_frame(FrameIndex(1)).is_ok());

    engine.reset_scene(&setup()).unwrap();
    assert!(engine.render_frame(FrameIndex(1)).is_err());
}

#[test]
fn zero_resolution_is_rejected() {
    let mut engine = PreviewEngine::default();
    assert!(engine.set_output_resolution(0, 1080).is_err());
}
