use super::*;
use crate::foundation::core::FrameIndex;

#[test]
fn idle_sway_has_two_keys_spanning_the_target() {
    let target = TargetRange::new(FrameIndex(1), FrameIndex(300)).unwrap();
    let c = synthesize(target);

    assert_eq!(c.data_path, "rotation_euler");
    assert_eq!(c.index, 2);
    assert_eq!(c.keyframes.len(), 2);
    assert_eq!((c.keyframes[0].time, c.keyframes[0].value), (1.0, 0.0));
    assert_eq!((c.keyframes[1].time, c.keyframes[1].value), (300.0, 0.05));
}

#[test]
fn idle_sway_is_deterministic() {
    let target = TargetRange::new(FrameIndex(1), FrameIndex(66)).unwrap();
    assert_eq!(synthesize(target), synthesize(target));
}

#[test]
fn idle_action_is_named_after_the_exercise() {
    let target = TargetRange::new(FrameIndex(1), FrameIndex(300)).unwrap();
    let action = synthesize_action("plank", target);
    assert_eq!(action.name, "plank_Idle");
    assert_eq!(action.curves.len(), 1);
    assert!(!action.is_empty());
}
