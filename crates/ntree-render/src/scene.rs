// ABOUTME: Display list for one frame: node circles, edges, labels and search highlights.
// ABOUTME: Only semantic color classes are chosen here; sinks decide concrete colors.

use ntree_core::{ColorClass, Point};
use ntree_layout::{HighlightState, Placement, SearchTrace};
use ntree_store::{SearchOutcome, Value};
use serde::Serialize;

/// Distance of the "Not Found!" banner left of the canvas center, and from the top
const BANNER_OFFSET: Point = Point::new(60.0, 50.0);
const BANNER_SIZE: f32 = 20.0;
const STATUS_POSITION: Point = Point::new(10.0, 20.0);
const STATUS_SIZE: f32 = 16.0;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// Node value inside its circle
    Label,
    /// Banners and status messages
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f32,
        class: ColorClass,
    },
    Line {
        from: Point,
        to: Point,
    },
    Text {
        text: String,
        position: Point,
        size: f32,
        role: TextRole,
    },
}

/// Anything that can draw the three primitives a scene is made of
pub trait DrawSink {
    fn draw_circle(&mut self, center: Point, radius: f32, class: ColorClass);
    fn draw_line(&mut self, from: Point, to: Point);
    fn draw_text(&mut self, text: &str, position: Point, size: f32, role: TextRole);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

/// Label anchor and font size for a node circle
fn label_geometry(center: Point, radius: f32) -> (Point, f32) {
    (
        Point::new(center.x - radius / 4.0, center.y - radius / 2.0),
        40.0 * 3.0 * radius / 200.0,
    )
}

fn highlight_class(state: HighlightState) -> Option<ColorClass> {
    match state {
        HighlightState::Visiting => None,
        HighlightState::Mismatch => Some(ColorClass::Exploring),
        HighlightState::MatchAncestor | HighlightState::Match => Some(ColorClass::Found),
    }
}

impl Scene {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Edges, circles and labels for every placed node, in pre-order
    pub fn add_tree(&mut self, placements: &[Placement]) {
        for placement in placements {
            if let Some(parent) = placement.parent {
                self.commands.push(DrawCommand::Line {
                    from: parent,
                    to: placement.position,
                });
            }
            self.add_node(
                placement.value,
                placement.position,
                placement.radius,
                ColorClass::Neutral,
            );
        }
    }

    /// Overlay search highlights in walk order; later states cover earlier ones
    pub fn add_search(&mut self, trace: &SearchTrace) {
        for step in &trace.steps {
            if let Some(class) = highlight_class(step.state) {
                self.add_node(step.value, step.position, step.radius, class);
            }
        }

        if trace.outcome == SearchOutcome::NotFoundHere {
            self.commands.push(DrawCommand::Text {
                text: "Not Found!".to_string(),
                position: Point::new(
                    self.width as f32 / 2.0 - BANNER_OFFSET.x,
                    BANNER_OFFSET.y,
                ),
                size: BANNER_SIZE,
                role: TextRole::Alert,
            });
        }
    }

    pub fn add_status(&mut self, message: &str) {
        self.commands.push(DrawCommand::Text {
            text: message.to_string(),
            position: STATUS_POSITION,
            size: STATUS_SIZE,
            role: TextRole::Alert,
        });
    }

    fn add_node(&mut self, value: Value, center: Point, radius: f32, class: ColorClass) {
        let (position, size) = label_geometry(center, radius);
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            class,
        });
        self.commands.push(DrawCommand::Text {
            text: value.to_string(),
            position,
            size,
            role: TextRole::Label,
        });
    }

    /// Draw every command into `sink`, in order
    pub fn replay(&self, sink: &mut impl DrawSink) {
        for command in &self.commands {
            match command {
                DrawCommand::Circle {
                    center,
                    radius,
                    class,
                } => sink.draw_circle(*center, *radius, *class),
                DrawCommand::Line { from, to } => sink.draw_line(*from, *to),
                DrawCommand::Text {
                    text,
                    position,
                    size,
                    role,
                } => sink.draw_text(text, *position, *size, *role),
            }
        }
        tracing::trace!(commands = self.commands.len(), "scene replayed");
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntree_layout::RadialLayout;
    use ntree_store::TreeStore;

    #[derive(Default)]
    struct CountingSink {
        circles: Vec<ColorClass>,
        lines: usize,
        texts: Vec<(String, TextRole)>,
    }

    impl DrawSink for CountingSink {
        fn draw_circle(&mut self, _center: Point, _radius: f32, class: ColorClass) {
            self.circles.push(class);
        }

        fn draw_line(&mut self, _from: Point, _to: Point) {
            self.lines += 1;
        }

        fn draw_text(&mut self, text: &str, _position: Point, _size: f32, role: TextRole) {
            self.texts.push((text.to_string(), role));
        }
    }

    fn layout() -> RadialLayout {
        RadialLayout::new(Point::new(900.0, 300.0), 70.0, 0.0)
    }

    fn sample() -> TreeStore {
        let mut tree = TreeStore::new();
        tree.insert(10, 0, 1).unwrap();
        tree.insert(20, 10, 2).unwrap();
        tree.insert(30, 10, 2).unwrap();
        tree
    }

    #[test]
    fn tree_draws_one_circle_and_label_per_node_and_one_line_per_edge() {
        let tree = sample();
        let mut scene = Scene::new(1800, 900);
        scene.add_tree(&layout().compute_positions(tree.root()));

        let mut sink = CountingSink::default();
        scene.replay(&mut sink);
        assert_eq!(sink.circles, vec![ColorClass::Neutral; 3]);
        assert_eq!(sink.lines, 2);
        let labels: Vec<_> = sink.texts.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(labels, vec!["10", "20", "30"]);
    }

    #[test]
    fn edge_is_drawn_before_child_circle() {
        let tree = sample();
        let mut scene = Scene::new(1800, 900);
        scene.add_tree(&layout().compute_positions(tree.root()));

        assert!(matches!(scene.commands[0], DrawCommand::Circle { .. }));
        assert!(matches!(scene.commands[1], DrawCommand::Text { .. }));
        assert!(matches!(scene.commands[2], DrawCommand::Line { .. }));
        assert!(matches!(scene.commands[3], DrawCommand::Circle { .. }));
    }

    #[test]
    fn label_scales_with_radius() {
        let (position, size) = label_geometry(Point::new(100.0, 100.0), 70.0);
        assert!((position.x - 82.5).abs() < 1e-4);
        assert!((position.y - 65.0).abs() < 1e-4);
        assert!((size - 42.0).abs() < 1e-4);
    }

    #[test]
    fn found_search_highlights_match_and_ancestors() {
        let tree = sample();
        let mut scene = Scene::new(1800, 900);
        scene.add_search(&layout().compute_search_positions(tree.root(), 30));

        let mut sink = CountingSink::default();
        scene.replay(&mut sink);
        assert_eq!(
            sink.circles,
            vec![
                ColorClass::Exploring, // 10
                ColorClass::Exploring, // 20
                ColorClass::Found,     // 30
                ColorClass::Found,     // 10 again, on the way back
            ]
        );
        assert!(sink.texts.iter().all(|(_, role)| *role == TextRole::Label));
    }

    #[test]
    fn missed_search_adds_banner() {
        let tree = sample();
        let mut scene = Scene::new(1800, 900);
        scene.add_search(&layout().compute_search_positions(tree.root(), 99));

        let banner = scene.commands.last().unwrap();
        assert_eq!(
            banner,
            &DrawCommand::Text {
                text: "Not Found!".to_string(),
                position: Point::new(840.0, 50.0),
                size: 20.0,
                role: TextRole::Alert,
            }
        );
    }

    #[test]
    fn idle_search_draws_nothing() {
        let mut scene = Scene::new(1800, 900);
        scene.add_search(&SearchTrace::default());
        assert!(scene.commands.is_empty());
    }

    #[test]
    fn json_display_list_tags_commands() {
        let mut scene = Scene::new(100, 100);
        scene.add_status("hello");
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"kind\": \"text\""));
        assert!(json.contains("\"role\": \"alert\""));
        assert!(json.contains("\"hello\""));
    }
}
