// ABOUTME: Radial layout for the bounded-arity tree.
// ABOUTME: Places every node by angular subdivision and traces searches with positions.

mod radial;
mod search;

pub use radial::{child_angle, Placement, RadialLayout};
pub use search::{HighlightState, SearchStep, SearchTrace};
