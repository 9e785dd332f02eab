use super::*;
use crate::foundation::core::FrameIndex;

fn id(s: &str) -> ExerciseId {
    ExerciseId::new(s).unwrap()
}

fn set(ids: &[&str]) -> BTreeSet<ExerciseId> {
    ids.iter().map(|s| id(s)).collect()
}

fn settings() -> DurationSettings {
    DurationSettings {
        fps: Fps::integer(30).unwrap(),
        rep_seconds: 2.2,
        static_seconds: 10.0,
    }
}

#[test]
fn membership_drives_both_axes_independently() {
    let statics = set(&["plank", "wall-sit"]);
    let floors = set(&["plank", "mountain-climbers"]);

    assert_eq!(
        classify(&id("plank"), &statics, &floors),
        ExerciseClass {
            duration: DurationClass::StaticHold,
            camera: CameraClass::Floor,
        }
    );
    assert_eq!(
        classify(&id("wall-sit"), &statics, &floors),
        ExerciseClass {
            duration: DurationClass::StaticHold,
            camera: CameraClass::Standing,
        }
    );
    assert_eq!(
        classify(&id("mountain-climbers"), &statics, &floors),
        ExerciseClass {
            duration: DurationClass::CyclicRep,
            camera: CameraClass::Floor,
        }
    );
    assert_eq!(
        classify(&id("squats"), &statics, &floors),
        ExerciseClass {
            duration: DurationClass::CyclicRep,
            camera: CameraClass::Standing,
        }
    );
}

#[test]
fn static_hold_range_uses_static_seconds() {
    let r = settings().target_range(DurationClass::StaticHold).unwrap();
    assert_eq!(r.end, FrameIndex(300));
}

#[test]
fn cyclic_rep_range_uses_rep_seconds() {
    let r = settings().target_range(DurationClass::CyclicRep).unwrap();
    assert_eq!(r.start, FrameIndex(1));
    assert_eq!(r.end, FrameIndex(66));
}

#[test]
fn floor_camera_sits_lower_and_closer() {
    let floor = CameraPlacement::for_class(CameraClass::Floor);
    let standing = CameraPlacement::for_class(CameraClass::Standing);
    assert!(floor.location[2] < standing.location[2]);
    assert!(floor.location[1] > standing.location[1]);
    assert_eq!(floor.rotation, standing.rotation);
    assert_eq!(floor.lens_mm, 50.0);
}
