use crate::foundation::error::{RepcueError, RepcueResult};

/// Absorbs float representation error (`0.7 * 30 = 20.999...`) before flooring seconds to frames.
const FRAME_FLOOR_EPSILON: f64 = 1e-9;

/// Absolute frame number in scene timeline space (1-based in practice).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> RepcueResult<Self> {
        if den == 0 {
            return Err(RepcueError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RepcueError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Whole-number rate, the form used by catalog configuration.
    pub fn integer(fps: u32) -> RepcueResult<Self> {
        Self::new(fps, 1)
    }

    /// Rate as floating point frames per second.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Rate rounded to the nearest whole frame count, at least 1.
    pub fn rounded(self) -> u32 {
        (self.as_f64().round() as u32).max(1)
    }

    /// Convert seconds to a frame count, rounding down.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64() + FRAME_FLOOR_EPSILON)
            .floor()
            .max(0.0) as u64
    }
}

/// Inclusive frame range `[start, end]` the scene timeline is set to for one exercise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TargetRange {
    /// First rendered frame (always 1 for computed ranges).
    pub start: FrameIndex,
    /// Last rendered frame, inclusive.
    pub end: FrameIndex,
}

impl TargetRange {
    /// First frame of every computed target range.
    pub const START: FrameIndex = FrameIndex(1);
    /// Shortest allowed range end; keeps at least two frames in the timeline.
    pub const MIN_END: FrameIndex = FrameIndex(2);

    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> RepcueResult<Self> {
        if start.0 > end.0 {
            return Err(RepcueError::validation("TargetRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Range starting at frame 1 covering `seconds` at `fps`, rounded down, never below frame 2.
    pub fn from_seconds(fps: Fps, seconds: f64) -> RepcueResult<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(RepcueError::validation(format!(
                "duration must be a positive number of seconds, got {seconds}"
            )));
        }
        let end = fps.secs_to_frames_floor(seconds).max(Self::MIN_END.0);
        Self::new(Self::START, FrameIndex(end))
    }

    /// Number of frames in the range, counting both ends.
    pub fn len_frames(self) -> u64 {
        self.end.0 - self.start.0 + 1
    }

    /// Iterate every frame of the range in order.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..=self.end.0).map(FrameIndex)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
