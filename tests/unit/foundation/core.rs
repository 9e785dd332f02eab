use super::*;

#[test]
fn static_hold_at_thirty_fps_ends_on_frame_300() {
    let fps = Fps::integer(30).unwrap();
    let r = TargetRange::from_seconds(fps, 10.0).unwrap();
    assert_eq!(r.start, FrameIndex(1));
    assert_eq!(r.end, FrameIndex(300));
}

#[test]
fn rep_of_2_2_seconds_ends_on_frame_66() {
    let fps = Fps::integer(30).unwrap();
    let r = TargetRange::from_seconds(fps, 2.2).unwrap();
    assert_eq!(r.end, FrameIndex(66));
    assert_eq!(r.len_frames(), 66);
}

#[test]
fn short_durations_floor_to_two_frames() {
    let fps = Fps::integer(30).unwrap();
    let r = TargetRange::from_seconds(fps, 0.01).unwrap();
    assert_eq!(r.end, FrameIndex(2));
    assert_eq!(r.frames().count(), 2);
}

#[test]
fn seconds_to_frames_rounds_down() {
    let fps = Fps::integer(30).unwrap();
    assert_eq!(fps.secs_to_frames_floor(0.7), 21);
    assert_eq!(fps.secs_to_frames_floor(1.99), 59);
}

#[test]
fn non_positive_durations_are_rejected() {
    let fps = Fps::integer(30).unwrap();
    assert!(TargetRange::from_seconds(fps, 0.0).is_err());
    assert!(TargetRange::from_seconds(fps, -1.0).is_err());
    assert!(TargetRange::from_seconds(fps, f64::NAN).is_err());
}

#[test]
fn zero_fps_is_rejected() {
    assert!(Fps::integer(0).is_err());
    assert!(Fps::new(30, 0).is_err());
}
