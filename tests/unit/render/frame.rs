use super::*;
use crate::animation::curve::{Interpolation, Keyframe};
use crate::animation::idle;

fn range(end: u64) -> TargetRange {
    TargetRange::new(FrameIndex(1), FrameIndex(end)).unwrap()
}

fn count_color(frame: &FrameRGBA, rgba: [u8; 4]) -> usize {
    frame.data.chunks_exact(4).filter(|px| *px == rgba).count()
}

#[test]
fn fill_rect_clips_to_frame() {
    let mut f = FrameRGBA::filled(4, 4, [0, 0, 0, 255]);
    f.fill_rect(-10.0, 2.0, 2.0, 50.0, [255, 0, 0, 255]);
    assert_eq!(f.pixel(0, 3), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(1, 2), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(2, 2), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(0, 1), Some([0, 0, 0, 255]));
    assert_eq!(f.pixel(4, 0), None);
}

#[test]
fn painted_frame_has_requested_size_and_is_opaque() {
    let painter = PreviewPainter::new(
        64,
        36,
        CameraClass::Standing,
        range(10),
        None,
        PreviewStyle::default(),
    );
    let f = painter.paint(FrameIndex(1));
    assert_eq!((f.width, f.height), (64, 36));
    assert_eq!(f.data.len(), 64 * 36 * 4);
    assert!(f.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn playhead_grows_across_the_range() {
    let style = PreviewStyle::default();
    let painter = PreviewPainter::new(100, 100, CameraClass::Standing, range(11), None, style);
    let first = count_color(&painter.paint(FrameIndex(1)), style.playhead);
    let mid = count_color(&painter.paint(FrameIndex(6)), style.playhead);
    let last = count_color(&painter.paint(FrameIndex(11)), style.playhead);
    assert_eq!(first, 0);
    assert!(mid > first && last > mid);
    assert_eq!(last, 100 * 2);
}

#[test]
fn marker_moves_with_the_sampled_value() {
    let style = PreviewStyle::default();
    let action = Action::new(
        "Squat",
        vec![AnimationCurve::new(
            "location",
            2,
            vec![
                Keyframe::new(1.0, 0.0, Interpolation::Linear),
                Keyframe::new(11.0, 1.0, Interpolation::Linear),
            ],
        )],
    );
    let painter = PreviewPainter::new(
        200,
        100,
        CameraClass::Standing,
        range(11),
        Some(&action),
        style,
    );
    let marker_x = |frame: u64| {
        let f = painter.paint(FrameIndex(frame));
        (0..f.width)
            .find(|&x| f.pixel(x, 5) == Some(style.marker))
            .unwrap()
    };
    assert!(marker_x(11) > marker_x(1));
}

#[test]
fn idle_sway_shifts_the_figure() {
    let style = PreviewStyle::default();
    let action = idle::synthesize_action("plank", range(300));
    let painter = PreviewPainter::new(
        400,
        400,
        CameraClass::Standing,
        range(300),
        Some(&action),
        style,
    );
    let figure_left = |frame: u64| {
        let f = painter.paint(FrameIndex(frame));
        let y = (400.0 * 0.78) as u32 - 5;
        (0..f.width)
            .find(|&x| f.pixel(x, y) == Some(style.figure))
            .unwrap()
    };
    assert!(figure_left(300) > figure_left(1));
}
