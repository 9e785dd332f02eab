/// Duration and camera classification.
pub mod classify;
/// Exercise id newtype.
pub mod id;
/// Asset resolution and catalog discovery.
pub mod resolve;
