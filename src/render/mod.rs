/// RGBA frames and the preview painter.
pub mod frame;
/// Aspect profiles and render job expansion.
pub mod jobs;
