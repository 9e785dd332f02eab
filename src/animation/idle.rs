use crate::animation::curve::{Action, AnimationCurve, Interpolation, Keyframe};
use crate::foundation::core::TargetRange;

/// Property the idle sway is keyed on.
pub const IDLE_DATA_PATH: &str = "rotation_euler";
/// Z component of [`IDLE_DATA_PATH`].
pub const IDLE_INDEX: u32 = 2;
/// Rotation reached on the last frame, about 3 degrees.
pub const IDLE_SWAY_RADIANS: f64 = 0.05;

/// Two-key rotation channel for holds that have no authored animation:
/// 0 at `target.start`, [`IDLE_SWAY_RADIANS`] at `target.end`.
pub fn synthesize(target: TargetRange) -> AnimationCurve {
    AnimationCurve::new(
        IDLE_DATA_PATH,
        IDLE_INDEX,
        vec![
            Keyframe::new(target.start.0 as f64, 0.0, Interpolation::Linear),
            Keyframe::new(target.end.0 as f64, IDLE_SWAY_RADIANS, Interpolation::Linear),
        ],
    )
}

/// Wrap [`synthesize`] in an action named `<name>_Idle`.
pub fn synthesize_action(name: &str, target: TargetRange) -> Action {
    Action::new(format!("{name}_Idle"), vec![synthesize(target)])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/idle.rs"]
mod tests;
