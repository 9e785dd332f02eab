//! Affine retiming of authored animation onto the scene's target range.
//!
//! Every key time and both handle times of every curve go through the same map
//!
//! ```text
//! t' = (t - source.first_frame) * scale + target.start
//! scale = target.len_frames() / max(source.last_frame - source.first_frame, 1)
//! ```
//!
//! so relative spacing and curve shape are preserved while the authored span becomes exactly
//! `target.len_frames()` frames long. The last authored key therefore lands one frame past
//! `target.end`, on the pose the next loop starts from.
//!
//! Retiming is only meaningful on pristine source curves. [`Action::retime`] consumes the
//! action and returns a [`RetimedAction`], which has no way back into the retimer.

use crate::animation::curve::{Action, AnimationCurve, SourceRange};
use crate::foundation::core::TargetRange;

/// Affine time map from a source range onto a target range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RetimeTransform {
    /// Target frames per source frame.
    pub scale: f64,
    source_start: f64,
    target_start: f64,
}

impl RetimeTransform {
    /// Map `source` onto `target`. A degenerate source is clamped to a length of one frame.
    pub fn between(source: SourceRange, target: TargetRange) -> Self {
        if source.is_degenerate() {
            tracing::debug!(
                first = source.first_frame,
                last = source.last_frame,
                "degenerate source range, clamping length to 1"
            );
        }
        Self {
            scale: target.len_frames() as f64 / source.clamped_len(),
            source_start: source.first_frame,
            target_start: target.start.0 as f64,
        }
    }

    /// Constant term of the map written as `t' = t * scale + offset`.
    pub fn offset(&self) -> f64 {
        self.target_start - self.source_start * self.scale
    }

    /// Map one source time.
    pub fn apply(&self, time: f64) -> f64 {
        (time - self.source_start) * self.scale + self.target_start
    }

    /// Remap every key and handle time of `curve` in place. Values are untouched.
    pub fn apply_to_curve(&self, curve: &mut AnimationCurve) {
        for k in &mut curve.keyframes {
            k.time = self.apply(k.time);
            k.handle_left.time = self.apply(k.handle_left.time);
            k.handle_right.time = self.apply(k.handle_right.time);
        }
    }
}

/// Return a copy of `curve` retimed from `source` onto `target`.
pub fn retime(curve: &AnimationCurve, source: SourceRange, target: TargetRange) -> AnimationCurve {
    let mut out = curve.clone();
    RetimeTransform::between(source, target).apply_to_curve(&mut out);
    out
}

/// An action whose curves have been mapped onto a target range.
#[derive(Clone, Debug, PartialEq)]
pub struct RetimedAction {
    action: Action,
    transform: RetimeTransform,
    target: TargetRange,
}

impl RetimedAction {
    /// The retimed action, ready to bind.
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// Map that was applied to every curve.
    pub fn transform(&self) -> RetimeTransform {
        self.transform
    }

    /// Range the action now spans.
    pub fn target(&self) -> TargetRange {
        self.target
    }
}

impl Action {
    /// Retime every curve with one shared transform derived from [`Action::source_range`].
    ///
    /// Returns `None` when the action has no keys to derive a range from.
    pub fn retime(mut self, target: TargetRange) -> Option<RetimedAction> {
        let source = self.source_range()?;
        let transform = RetimeTransform::between(source, target);
        for curve in &mut self.curves {
            transform.apply_to_curve(curve);
        }
        self.frame_range = Some(SourceRange::new(
            transform.apply(source.first_frame),
            transform.apply(source.last_frame),
        ));
        Some(RetimedAction {
            action: self,
            transform,
            target,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/retime.rs"]
mod tests;
