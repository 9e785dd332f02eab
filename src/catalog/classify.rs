use std::collections::BTreeSet;

use crate::catalog::id::ExerciseId;
use crate::foundation::core::{Fps, TargetRange};
use crate::foundation::error::RepcueResult;

/// Which configured duration an exercise is rendered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    /// Repeating motion loop, rendered for `rep_seconds`.
    CyclicRep,
    /// Held pose, rendered for `static_seconds`.
    StaticHold,
}

/// Camera framing class; only affects camera placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraClass {
    /// Exercise performed on the ground; lower, closer camera.
    Floor,
    /// Upright exercise.
    Standing,
}

/// Derived classification of one exercise id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ExerciseClass {
    /// Loop length class.
    pub duration: DurationClass,
    /// Camera framing class.
    pub camera: CameraClass,
}

/// Classify an id by membership in the two configured sets.
///
/// The sets are independent: an id may be in either, both or neither.
pub fn classify(
    id: &ExerciseId,
    static_ids: &BTreeSet<ExerciseId>,
    floor_ids: &BTreeSet<ExerciseId>,
) -> ExerciseClass {
    let duration = if static_ids.contains(id) {
        DurationClass::StaticHold
    } else {
        DurationClass::CyclicRep
    };
    let camera = if floor_ids.contains(id) {
        CameraClass::Floor
    } else {
        CameraClass::Standing
    };
    ExerciseClass { duration, camera }
}

/// Timing inputs used to turn a [`DurationClass`] into a [`TargetRange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationSettings {
    /// Scene frame rate.
    pub fps: Fps,
    /// Loop length for [`DurationClass::CyclicRep`].
    pub rep_seconds: f64,
    /// Loop length for [`DurationClass::StaticHold`].
    pub static_seconds: f64,
}

impl DurationSettings {
    /// Seconds configured for `class`.
    pub fn seconds_for(&self, class: DurationClass) -> f64 {
        match class {
            DurationClass::CyclicRep => self.rep_seconds,
            DurationClass::StaticHold => self.static_seconds,
        }
    }

    /// Target timeline for `class`: frame 1 through `floor(seconds * fps)`, at least frame 2.
    pub fn target_range(&self, class: DurationClass) -> RepcueResult<TargetRange> {
        TargetRange::from_seconds(self.fps, self.seconds_for(class))
    }
}

/// Camera rig placement for a [`CameraClass`], in scene units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPlacement {
    /// Camera position (x, y, z).
    pub location: [f64; 3],
    /// Euler XYZ rotation, radians.
    pub rotation: [f64; 3],
    /// Focal length in millimetres.
    pub lens_mm: f64,
}

impl CameraPlacement {
    /// Downward tilt shared by both classes (10 degrees below horizontal).
    const TILT_X_DEG: f64 = 80.0;
    const LENS_MM: f64 = 50.0;

    /// Placement used for `class`.
    pub fn for_class(class: CameraClass) -> Self {
        let location = match class {
            CameraClass::Floor => [0.0, -3.2, 1.0],
            CameraClass::Standing => [0.0, -4.2, 1.5],
        };
        Self {
            location,
            rotation: [Self::TILT_X_DEG.to_radians(), 0.0, 0.0],
            lens_mm: Self::LENS_MM,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/classify.rs"]
mod tests;
