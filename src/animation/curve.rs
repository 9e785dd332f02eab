use crate::foundation::error::{RepcueError, RepcueResult};

/// Bezier handle position in (frame, value) space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HandlePoint {
    /// Frame coordinate.
    pub time: f64,
    /// Value coordinate.
    pub value: f64,
}

/// How a curve is evaluated between a key and the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    /// Hold the key value until the next key.
    Constant,
    /// Straight line to the next key.
    Linear,
    /// Cubic bezier through this key's right handle and the next key's left handle.
    #[default]
    Bezier,
}

/// One key of an animated channel.
///
/// Handles default to the key position when omitted in serialized form.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "KeyframeDef")]
pub struct Keyframe {
    /// Frame number (fractional frames allowed).
    pub time: f64,
    /// Channel value at `time`.
    pub value: f64,
    /// Incoming bezier handle.
    pub handle_left: HandlePoint,
    /// Outgoing bezier handle.
    pub handle_right: HandlePoint,
    /// Evaluation mode from this key to the next.
    pub interpolation: Interpolation,
}

#[derive(serde::Deserialize)]
struct KeyframeDef {
    time: f64,
    value: f64,
    #[serde(default)]
    handle_left: Option<HandlePoint>,
    #[serde(default)]
    handle_right: Option<HandlePoint>,
    #[serde(default)]
    interpolation: Interpolation,
}

impl From<KeyframeDef> for Keyframe {
    fn from(def: KeyframeDef) -> Self {
        let at_key = HandlePoint {
            time: def.time,
            value: def.value,
        };
        Self {
            time: def.time,
            value: def.value,
            handle_left: def.handle_left.unwrap_or(at_key),
            handle_right: def.handle_right.unwrap_or(at_key),
            interpolation: def.interpolation,
        }
    }
}

impl Keyframe {
    /// Key with both handles collapsed onto the key itself.
    pub fn new(time: f64, value: f64, interpolation: Interpolation) -> Self {
        let at_key = HandlePoint { time, value };
        Self {
            time,
            value,
            handle_left: at_key,
            handle_right: at_key,
            interpolation,
        }
    }
}

/// One animated channel: a property path, an array index and its keys in source order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationCurve {
    /// Animated property, e.g. `rotation_euler` or `pose.bones["hips"].location`.
    pub data_path: String,
    /// Component of the property (0 = X, 1 = Y, 2 = Z).
    #[serde(default)]
    pub index: u32,
    /// Keys ordered by time.
    pub keyframes: Vec<Keyframe>,
}

impl AnimationCurve {
    /// Curve for `data_path[index]` with the given keys.
    pub fn new(data_path: impl Into<String>, index: u32, keyframes: Vec<Keyframe>) -> Self {
        Self {
            data_path: data_path.into(),
            index,
            keyframes,
        }
    }

    /// `(first, last)` key time in source order, or `None` for an empty curve.
    pub fn key_span(&self) -> Option<(f64, f64)> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;
        Some((first.time, last.time))
    }

    /// Reject non-finite times and keys that go backwards in time.
    pub fn validate(&self) -> RepcueResult<()> {
        let mut prev = f64::NEG_INFINITY;
        for (i, k) in self.keyframes.iter().enumerate() {
            let finite = [
                k.time,
                k.value,
                k.handle_left.time,
                k.handle_left.value,
                k.handle_right.time,
                k.handle_right.value,
            ]
            .iter()
            .all(|v| v.is_finite());
            if !finite {
                return Err(RepcueError::animation(format!(
                    "curve '{}[{}]' key {i} has a non-finite component",
                    self.data_path, self.index
                )));
            }
            if k.time < prev {
                return Err(RepcueError::animation(format!(
                    "curve '{}[{}]' key {i} at frame {} precedes the previous key",
                    self.data_path, self.index, k.time
                )));
            }
            prev = k.time;
        }
        Ok(())
    }

    /// Evaluate the curve at `frame`; values outside the key span hold the end keys.
    pub fn sample(&self, frame: f64) -> Option<f64> {
        let first = self.keyframes.first()?;
        if frame <= first.time {
            return Some(first.value);
        }
        for pair in self.keyframes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if frame >= b.time {
                continue;
            }
            let span = b.time - a.time;
            if span <= 0.0 {
                return Some(b.value);
            }
            return Some(match a.interpolation {
                Interpolation::Constant => a.value,
                Interpolation::Linear => a.value + (b.value - a.value) * ((frame - a.time) / span),
                Interpolation::Bezier => sample_bezier_segment(a, b, frame),
            });
        }
        self.keyframes.last().map(|k| k.value)
    }
}

fn sample_bezier_segment(a: &Keyframe, b: &Keyframe, frame: f64) -> f64 {
    // Handles are clamped into the segment so x(t) stays monotonic.
    let x0 = a.time;
    let x3 = b.time;
    let x1 = a.handle_right.time.clamp(x0, x3);
    let x2 = b.handle_left.time.clamp(x0, x3);
    let (y0, y1, y2, y3) = (a.value, a.handle_right.value, b.handle_left.value, b.value);

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    for _ in 0..48 {
        let mid = 0.5 * (lo + hi);
        if cubic(x0, x1, x2, x3, mid) < frame {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    cubic(y0, y1, y2, y3, 0.5 * (lo + hi))
}

fn cubic(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Frame span an action's keys were authored over.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourceRange {
    /// First authored frame.
    pub first_frame: f64,
    /// Last authored frame.
    pub last_frame: f64,
}

impl SourceRange {
    /// Range from `first_frame` to `last_frame`; not validated.
    pub fn new(first_frame: f64, last_frame: f64) -> Self {
        Self {
            first_frame,
            last_frame,
        }
    }

    /// `true` when the range has no positive length.
    pub fn is_degenerate(self) -> bool {
        self.last_frame <= self.first_frame
    }

    /// Range length, clamped to at least one frame.
    pub fn clamped_len(self) -> f64 {
        (self.last_frame - self.first_frame).max(1.0)
    }
}

/// A named set of curves animating one rig, as imported from an asset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Action {
    /// Action name as authored.
    pub name: String,
    /// Animated channels.
    pub curves: Vec<AnimationCurve>,
    /// Authored range; when absent the union of the curves' key spans is used.
    #[serde(default)]
    pub frame_range: Option<SourceRange>,
}

impl Action {
    /// Action without an authored frame range.
    pub fn new(name: impl Into<String>, curves: Vec<AnimationCurve>) -> Self {
        Self {
            name: name.into(),
            curves,
            frame_range: None,
        }
    }

    /// `true` when no curve carries a key.
    pub fn is_empty(&self) -> bool {
        self.curves.iter().all(|c| c.keyframes.is_empty())
    }

    /// Range shared by every curve of the action, or `None` when there are no keys.
    pub fn source_range(&self) -> Option<SourceRange> {
        if let Some(r) = self.frame_range {
            return Some(r);
        }
        self.curves
            .iter()
            .filter_map(AnimationCurve::key_span)
            .fold(None, |acc, (first, last)| {
                Some(match acc {
                    None => SourceRange::new(first, last),
                    Some(r) => SourceRange::new(r.first_frame.min(first), r.last_frame.max(last)),
                })
            })
    }

    /// Reject a non-finite authored range and invalid curves.
    pub fn validate(&self) -> RepcueResult<()> {
        if let Some(r) = self.frame_range
            && !(r.first_frame.is_finite() && r.last_frame.is_finite())
        {
            return Err(RepcueError::animation(format!(
                "action '{}' has a non-finite frame range",
                self.name
            )));
        }
        self.curves.iter().try_for_each(AnimationCurve::validate)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
