// ABOUTME: Rendering front for ntree layouts.
// ABOUTME: Builds backend-neutral display lists and replays them into draw sinks such as SVG.

pub mod scene;
pub mod svg;

pub use scene::{DrawCommand, DrawSink, RenderError, Scene, TextRole};
pub use svg::SvgSink;
