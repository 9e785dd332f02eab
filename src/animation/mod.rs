/// Keyframe curves and actions.
pub mod curve;
/// Idle sway synthesis for static holds.
pub mod idle;
/// Affine retiming of actions onto a target range.
pub mod retime;
