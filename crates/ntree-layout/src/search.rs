// ABOUTME: Search walk fused with the radial layout.
// ABOUTME: Records every visited node with its position and highlight state, in visit order.

use ntree_core::Point;
use ntree_store::{Node, SearchOutcome, Value};

use crate::RadialLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightState {
    /// Reached, value not yet compared
    Visiting,
    /// Compared and not equal
    Mismatch,
    /// On the way back up from a match below
    MatchAncestor,
    /// Exact hit
    Match,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStep {
    /// Same ordinal `compute_positions` gives this node
    pub ordinal: usize,
    pub value: Value,
    pub position: Point,
    pub radius: f32,
    pub state: HighlightState,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchTrace {
    pub outcome: SearchOutcome,
    pub steps: Vec<SearchStep>,
}

impl SearchTrace {
    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Values from root to the match, as marked on the way back up
    pub fn path_values(&self) -> Vec<Value> {
        let mut path: Vec<Value> = self
            .steps
            .iter()
            .filter(|step| {
                matches!(
                    step.state,
                    HighlightState::Match | HighlightState::MatchAncestor
                )
            })
            .map(|step| step.value)
            .collect();
        path.reverse();
        path
    }
}

impl RadialLayout {
    /// Walk the tree exactly like `TreeStore::find_with_path`, placing each
    /// visited node the way `compute_positions` would.
    pub fn compute_search_positions(&self, root: Option<&Node>, value: Value) -> SearchTrace {
        let Some(root) = root else {
            return SearchTrace::default();
        };

        let mut walk = Walk {
            layout: self,
            value,
            next_ordinal: 0,
            steps: Vec::new(),
        };
        let found = walk.visit(root, self.center, self.base_radius);
        let outcome = if found {
            SearchOutcome::Found
        } else {
            SearchOutcome::NotFoundHere
        };
        tracing::debug!(value, ?outcome, visited = walk.next_ordinal, "search traced");

        SearchTrace {
            outcome,
            steps: walk.steps,
        }
    }
}

struct Walk<'l> {
    layout: &'l RadialLayout,
    value: Value,
    next_ordinal: usize,
    steps: Vec<SearchStep>,
}

impl Walk<'_> {
    fn visit(&mut self, node: &Node, at: Point, radius: f32) -> bool {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;

        let mark = |steps: &mut Vec<SearchStep>, state: HighlightState| {
            steps.push(SearchStep {
                ordinal,
                value: node.value(),
                position: at,
                radius,
                state,
            })
        };

        mark(&mut self.steps, HighlightState::Visiting);
        if node.value() == self.value {
            mark(&mut self.steps, HighlightState::Match);
            return true;
        }
        mark(&mut self.steps, HighlightState::Mismatch);

        let count = node.child_count();
        for (index, child) in node.children().iter().enumerate() {
            let (position, child_radius, _) = self.layout.place_child(at, radius, count, index);
            if self.visit(child, position, child_radius) {
                mark(&mut self.steps, HighlightState::MatchAncestor);
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntree_store::TreeStore;

    fn layout() -> RadialLayout {
        RadialLayout::new(Point::new(900.0, 300.0), 70.0, 0.0)
    }

    /// 10 -> [20 -> [40], 30]
    fn sample() -> TreeStore {
        let mut tree = TreeStore::new();
        tree.insert(10, 0, 1).unwrap();
        tree.insert(20, 10, 2).unwrap();
        tree.insert(30, 10, 2).unwrap();
        tree.insert(40, 20, 2).unwrap();
        tree
    }

    fn states(trace: &SearchTrace) -> Vec<(Value, HighlightState)> {
        trace.steps.iter().map(|s| (s.value, s.state)).collect()
    }

    #[test]
    fn empty_tree_is_idle() {
        let trace = layout().compute_search_positions(None, 5);
        assert_eq!(trace.outcome, SearchOutcome::Idle);
        assert!(trace.steps.is_empty());
    }

    #[test]
    fn root_match_stops_immediately() {
        let tree = sample();
        let trace = layout().compute_search_positions(tree.root(), 10);
        assert!(trace.is_found());
        assert_eq!(
            states(&trace),
            vec![
                (10, HighlightState::Visiting),
                (10, HighlightState::Match),
            ]
        );
    }

    #[test]
    fn match_marks_ancestors_on_the_way_back() {
        use HighlightState::*;

        let tree = sample();
        let trace = layout().compute_search_positions(tree.root(), 30);
        assert!(trace.is_found());
        assert_eq!(
            states(&trace),
            vec![
                (10, Visiting),
                (10, Mismatch),
                (20, Visiting),
                (20, Mismatch),
                (40, Visiting),
                (40, Mismatch),
                (30, Visiting),
                (30, Match),
                (10, MatchAncestor),
            ]
        );
        assert_eq!(trace.path_values(), vec![10, 30]);
    }

    #[test]
    fn path_agrees_with_store_search() {
        let tree = sample();
        let trace = layout().compute_search_positions(tree.root(), 40);
        assert_eq!(
            trace.path_values(),
            tree.find_with_path(40).path_values()
        );
    }

    #[test]
    fn miss_explores_every_node() {
        let tree = sample();
        let trace = layout().compute_search_positions(tree.root(), 99);
        assert_eq!(trace.outcome, SearchOutcome::NotFoundHere);
        assert!(trace
            .steps
            .iter()
            .all(|s| s.state != HighlightState::Match));
        assert!(trace.path_values().is_empty());

        let mismatches = trace
            .steps
            .iter()
            .filter(|s| s.state == HighlightState::Mismatch)
            .count();
        assert_eq!(mismatches, tree.len());
    }

    #[test]
    fn positions_match_full_layout() {
        let tree = sample();
        let placements = layout().compute_positions(tree.root());
        let trace = layout().compute_search_positions(tree.root(), 99);

        for step in &trace.steps {
            let placement = &placements[step.ordinal];
            assert_eq!(placement.value, step.value);
            assert_eq!(placement.position, step.position);
            assert_eq!(placement.radius, step.radius);
        }
    }
}
