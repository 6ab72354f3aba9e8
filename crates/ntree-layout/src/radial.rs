// ABOUTME: Recursive angular layout: children fan over 180 degrees below their parent.
// ABOUTME: Every depth reuses the same base angle; only offset and radius change.

use ntree_core::{Config, Point};
use ntree_store::{Node, Value};

/// Angular width every fan of children is spread over
const FAN_DEGREES: f32 = 180.0;

/// One laid-out node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the node in a pre-order walk
    pub ordinal: usize,
    pub value: Value,
    pub depth: usize,
    pub position: Point,
    pub radius: f32,
    /// Where the parent was placed; `None` for the root
    pub parent: Option<Point>,
    /// Angle in degrees the node was placed at relative to its parent
    pub angle: Option<f32>,
}

/// Angle in degrees of child `index` out of `count` siblings
pub fn child_angle(base_angle: f32, count: usize, index: usize) -> f32 {
    base_angle + (FAN_DEGREES / count as f32) * (index as f32 + 0.5)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    pub center: Point,
    pub base_radius: f32,
    /// Degrees; passed unchanged to every generation
    pub base_angle: f32,
}

impl RadialLayout {
    pub fn new(center: Point, base_radius: f32, base_angle: f32) -> Self {
        Self {
            center,
            base_radius,
            base_angle,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.origin(),
            config.layout.base_radius,
            config.layout.base_angle,
        )
    }

    /// Position and radius of child `index` of a node at `at` with radius `radius`
    pub(crate) fn place_child(
        &self,
        at: Point,
        radius: f32,
        count: usize,
        index: usize,
    ) -> (Point, f32, f32) {
        let angle = child_angle(self.base_angle, count, index);
        (at.offset_polar(angle, radius * 2.0), radius / 2.0, angle)
    }

    /// Place every node of the tree, in pre-order. An empty tree yields nothing.
    pub fn compute_positions(&self, root: Option<&Node>) -> Vec<Placement> {
        let mut out = Vec::new();
        if let Some(root) = root {
            self.place(root, Slot::root(self), &mut out);
        }
        tracing::trace!(nodes = out.len(), "computed layout");
        out
    }

    fn place(&self, node: &Node, slot: Slot, out: &mut Vec<Placement>) {
        out.push(Placement {
            ordinal: out.len(),
            value: node.value(),
            depth: slot.depth,
            position: slot.at,
            radius: slot.radius,
            parent: slot.parent,
            angle: slot.angle,
        });

        let count = node.child_count();
        for (index, child) in node.children().iter().enumerate() {
            let (at, radius, angle) = self.place_child(slot.at, slot.radius, count, index);
            let child_slot = Slot {
                at,
                radius,
                depth: slot.depth + 1,
                parent: Some(slot.at),
                angle: Some(angle),
            };
            self.place(child, child_slot, out);
        }
    }
}

/// Where a node goes before its ordinal and value are known
#[derive(Debug, Clone, Copy)]
struct Slot {
    at: Point,
    radius: f32,
    depth: usize,
    parent: Option<Point>,
    angle: Option<f32>,
}

impl Slot {
    fn root(layout: &RadialLayout) -> Self {
        Self {
            at: layout.center,
            radius: layout.base_radius,
            depth: 0,
            parent: None,
            angle: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntree_store::TreeStore;

    fn layout() -> RadialLayout {
        RadialLayout::new(Point::new(900.0, 300.0), 70.0, 0.0)
    }

    fn fan(children: usize) -> TreeStore {
        let mut tree = TreeStore::new();
        tree.insert(1, 0, 1).unwrap();
        for v in 0..children as i32 {
            tree.insert(10 + v, 1, 2).unwrap();
        }
        tree
    }

    #[test]
    fn empty_tree_has_no_placements() {
        assert!(layout().compute_positions(None).is_empty());
    }

    #[test]
    fn root_sits_at_center_with_base_radius() {
        let tree = fan(0);
        let placements = layout().compute_positions(tree.root());
        assert_eq!(placements.len(), 1);
        let root = &placements[0];
        assert_eq!(root.position, Point::new(900.0, 300.0));
        assert_eq!(root.radius, 70.0);
        assert_eq!(root.parent, None);
        assert_eq!(root.angle, None);
    }

    #[test]
    fn single_child_goes_straight_down() {
        let tree = fan(1);
        let placements = layout().compute_positions(tree.root());
        let child = &placements[1];
        assert_eq!(child.angle, Some(90.0));
        assert!((child.position.x - 900.0).abs() < 1e-3);
        assert!((child.position.y - 440.0).abs() < 1e-3);
        assert_eq!(child.radius, 35.0);
        assert_eq!(child.parent, Some(Point::new(900.0, 300.0)));
    }

    #[test]
    fn sibling_angles_are_evenly_spaced_and_symmetric() {
        for k in 1..=5 {
            let tree = fan(k);
            let placements = layout().compute_positions(tree.root());
            let angles: Vec<f32> = placements[1..].iter().map(|p| p.angle.unwrap()).collect();
            assert_eq!(angles.len(), k);

            let step = 180.0 / k as f32;
            for pair in angles.windows(2) {
                assert!(pair[1] > pair[0]);
                assert!((pair[1] - pair[0] - step).abs() < 1e-3);
            }
            // Symmetric around the middle of the fan
            for i in 0..k {
                let mirrored = angles[k - 1 - i];
                assert!((angles[i] + mirrored - 180.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn children_are_twice_the_radius_away() {
        let tree = fan(3);
        let placements = layout().compute_positions(tree.root());
        let center = placements[0].position;
        for child in &placements[1..] {
            assert!((center.distance_to(child.position) - 140.0).abs() < 1e-2);
        }
    }

    #[test]
    fn grandchildren_reuse_the_base_angle() {
        let mut tree = TreeStore::new();
        tree.insert(1, 0, 1).unwrap();
        tree.insert(2, 1, 2).unwrap();
        tree.insert(3, 1, 2).unwrap();
        tree.insert(4, 3, 2).unwrap();

        let placements = layout().compute_positions(tree.root());
        let values: Vec<_> = placements.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);

        let parent = &placements[2];
        let grandchild = &placements[3];
        // A lone grandchild sits at base + 90 no matter which way its parent went
        assert_eq!(grandchild.angle, Some(90.0));
        assert_eq!(grandchild.depth, 2);
        assert_eq!(grandchild.radius, 17.5);
        assert!((grandchild.position.x - parent.position.x).abs() < 1e-3);
        assert!((grandchild.position.y - parent.position.y - 70.0).abs() < 1e-3);
    }

    #[test]
    fn base_angle_rotates_the_fan() {
        let tree = fan(1);
        let rotated = RadialLayout::new(Point::new(0.0, 0.0), 10.0, 90.0);
        let placements = rotated.compute_positions(tree.root());
        assert_eq!(placements[1].angle, Some(180.0));
        assert!((placements[1].position.x + 20.0).abs() < 1e-3);
        assert!(placements[1].position.y.abs() < 1e-3);
    }

    #[test]
    fn layout_is_deterministic() {
        let tree = fan(4);
        let a = layout().compute_positions(tree.root());
        let b = layout().compute_positions(tree.root());
        assert_eq!(a, b);
    }

    #[test]
    fn ordinals_follow_preorder() {
        let tree = fan(3);
        let placements = layout().compute_positions(tree.root());
        for (i, p) in placements.iter().enumerate() {
            assert_eq!(p.ordinal, i);
        }
    }

    #[test]
    fn layout_from_default_config() {
        let layout = RadialLayout::from_config(&Config::default());
        assert_eq!(layout.center, Point::new(900.0, 300.0));
        assert_eq!(layout.base_radius, 70.0);
        assert_eq!(layout.base_angle, 0.0);
    }
}
