//! CPU frame buffer and the motion preview painter used by the preview engine.
//!
//! The preview is a schematic of the scene rather than a shaded render: a ground band placed per
//! camera class, a block figure swayed by the rig's rotation channels, one lane per animated
//! channel with a marker at the sampled value, and a playhead along the bottom edge.

use crate::animation::curve::{Action, AnimationCurve};
use crate::catalog::classify::CameraClass;
use crate::foundation::core::{FrameIndex, TargetRange};

/// Lanes drawn at most; extra channels are not shown.
const MAX_LANES: usize = 12;

/// Opaque RGBA8 frame, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Frame with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Fill the rectangle `[x0, x1) x [y0, y1)`, clipped to the frame.
    pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, rgba: [u8; 4]) {
        let clamp_x = |v: f64| v.round().clamp(0.0, f64::from(self.width)) as usize;
        let clamp_y = |v: f64| v.round().clamp(0.0, f64::from(self.height)) as usize;
        let (x0, x1) = (clamp_x(x0.min(x1)), clamp_x(x0.max(x1)));
        let (y0, y1) = (clamp_y(y0.min(y1)), clamp_y(y0.max(y1)));
        let stride = self.width as usize * 4;
        for y in y0..y1 {
            let row = &mut self.data[y * stride..(y + 1) * stride];
            for px in row[x0 * 4..x1 * 4].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}

/// Colors used by [`PreviewPainter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewStyle {
    /// Clear color.
    pub background: [u8; 4],
    /// Ground band.
    pub ground: [u8; 4],
    /// Swaying figure block.
    pub figure: [u8; 4],
    /// Channel lane track.
    pub lane: [u8; 4],
    /// Sampled value marker on a lane.
    pub marker: [u8; 4],
    /// Progress bar along the bottom edge.
    pub playhead: [u8; 4],
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self {
            background: [26, 26, 30, 255],
            ground: [48, 48, 54, 255],
            figure: [214, 214, 220, 255],
            lane: [62, 66, 78, 255],
            marker: [255, 140, 60, 255],
            playhead: [90, 170, 255, 255],
        }
    }
}

struct Lane<'a> {
    curve: &'a AnimationCurve,
    min: f64,
    max: f64,
}

/// Paints preview frames for one exercise at one resolution.
pub struct PreviewPainter<'a> {
    width: u32,
    height: u32,
    camera: CameraClass,
    range: TargetRange,
    lanes: Vec<Lane<'a>>,
    sway: Vec<&'a AnimationCurve>,
    style: PreviewStyle,
}

impl<'a> PreviewPainter<'a> {
    /// Painter for a `width` x `height` frame of `range`, animated by `action` when present.
    pub fn new(
        width: u32,
        height: u32,
        camera: CameraClass,
        range: TargetRange,
        action: Option<&'a Action>,
        style: PreviewStyle,
    ) -> Self {
        let curves: Vec<&AnimationCurve> = action
            .map(|a| a.curves.iter().filter(|c| !c.keyframes.is_empty()).collect())
            .unwrap_or_default();
        let lanes = curves
            .iter()
            .take(MAX_LANES)
            .map(|&curve| {
                let (min, max) = curve
                    .keyframes
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), k| {
                        (lo.min(k.value), hi.max(k.value))
                    });
                Lane { curve, min, max }
            })
            .collect();
        let sway = curves
            .into_iter()
            .filter(|c| c.data_path.contains("rotation"))
            .collect();
        Self {
            width,
            height,
            camera,
            range,
            lanes,
            sway,
            style,
        }
    }

    /// Paint `frame`. Frames outside the target range are clamped to it.
    pub fn paint(&self, frame: FrameIndex) -> FrameRGBA {
        let frame = frame.0.clamp(self.range.start.0, self.range.end.0);
        let t = frame as f64;
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let s = &self.style;
        let mut out = FrameRGBA::filled(self.width, self.height, s.background);

        let ground_y = match self.camera {
            CameraClass::Floor => h * 0.62,
            CameraClass::Standing => h * 0.78,
        };
        out.fill_rect(0.0, ground_y, w, h, s.ground);

        let sway: f64 = self.sway.iter().filter_map(|c| c.sample(t)).sum();
        let cx = w * 0.5 + sway * h * 0.5;
        let (fw, fh) = match self.camera {
            CameraClass::Floor => (h * 0.35, h * 0.05),
            CameraClass::Standing => (h * 0.06, h * 0.35),
        };
        out.fill_rect(cx - fw * 0.5, ground_y - fh, cx + fw * 0.5, ground_y, s.figure);

        let lane_h = (h * 0.02).max(2.0);
        let (lane_x0, lane_x1) = (w * 0.1, w * 0.9);
        for (i, lane) in self.lanes.iter().enumerate() {
            let y0 = h * 0.04 + i as f64 * lane_h * 2.0;
            out.fill_rect(lane_x0, y0, lane_x1, y0 + lane_h, s.lane);
            let Some(v) = lane.curve.sample(t) else {
                continue;
            };
            let span = lane.max - lane.min;
            let u = if span > 0.0 {
                ((v - lane.min) / span).clamp(0.0, 1.0)
            } else {
                0.5
            };
            let mx = lane_x0 + u * (lane_x1 - lane_x0);
            out.fill_rect(mx - lane_h * 0.5, y0, mx + lane_h * 0.5, y0 + lane_h, s.marker);
        }

        let progress = if self.range.len_frames() > 1 {
            (frame - self.range.start.0) as f64 / (self.range.len_frames() - 1) as f64
        } else {
            1.0
        };
        let bar_h = (h * 0.01).max(2.0);
        out.fill_rect(0.0, h - bar_h, w * progress, h, s.playhead);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
