// ABOUTME: The tree store: a single optional root and the operations that mutate it.
// ABOUTME: Insert by parent value with a depth budget, delete by value, reset, search.

use crate::node::{delete_subtree, Node, Value, MAX_CHILDREN};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Node {parent} already has the maximum of {capacity} children")]
    CapacityExceeded { parent: Value, capacity: usize },
}

/// Where a successful `insert` call put the new node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The tree was empty; the node is the new root
    Root,
    /// Attached as the last child of a matching node. `depth` is the new
    /// node's depth, with the root at 0.
    Attached { depth: usize },
    /// No node matched the parent value with a budget above 1; nothing changed
    NoMatch,
}

impl Insertion {
    pub fn inserted(&self) -> bool {
        !matches!(self, Insertion::NoMatch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    Found,
    NotFoundHere,
    /// No search ran, or the tree was empty
    #[default]
    Idle,
}

/// Result of `find_with_path`
#[derive(Debug, Clone, Default)]
pub struct SearchState<'a> {
    pub outcome: SearchOutcome,
    /// Root first, matched node last. Empty unless `outcome` is `Found`.
    pub path: Vec<&'a Node>,
}

impl SearchState<'_> {
    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    pub fn path_values(&self) -> Vec<Value> {
        self.path.iter().map(|node| node.value()).collect()
    }
}

#[derive(Debug, Default)]
pub struct TreeStore {
    root: Option<Node>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::size)
    }

    /// Number of levels; 0 for an empty tree
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, Node::height)
    }

    /// Values in pre-order
    pub fn values(&self) -> Vec<Value> {
        let mut out = Vec::new();
        if let Some(root) = &self.root {
            collect_values(root, &mut out);
        }
        out
    }

    pub fn contains(&self, value: Value) -> bool {
        self.find_with_path(value).is_found()
    }

    /// Insert `value` under the first node in pre-order whose value equals
    /// `parent` while `depth_budget > 1`. An empty tree takes the node as its
    /// root regardless of `parent` and `depth_budget`.
    pub fn insert(
        &mut self,
        value: Value,
        parent: Value,
        depth_budget: u32,
    ) -> Result<Insertion, TreeError> {
        let Some(root) = self.root.as_mut() else {
            tracing::debug!(value, "inserted root");
            self.root = Some(Node::leaf(value));
            return Ok(Insertion::Root);
        };

        match attach(root, value, parent, depth_budget, 0) {
            Ok(Some(depth)) => {
                tracing::debug!(value, parent, depth, "inserted node");
                Ok(Insertion::Attached { depth })
            }
            Ok(None) => {
                tracing::debug!(value, parent, depth_budget, "no attachment point");
                Ok(Insertion::NoMatch)
            }
            Err(e) => {
                tracing::warn!(value, "insert rejected: {}", e);
                Err(e)
            }
        }
    }

    /// Remove the first child (of any node) whose value equals `value`,
    /// together with its subtree. The root itself is never matched.
    /// Returns the number of released nodes.
    pub fn delete_by_value(&mut self, value: Value) -> usize {
        let released = self
            .root
            .as_mut()
            .and_then(|root| detach(root, value))
            .unwrap_or(0);
        tracing::debug!(value, released, "delete by value");
        released
    }

    /// Release every node. Returns how many were released.
    pub fn reset(&mut self) -> usize {
        let released = delete_subtree(self.root.take());
        tracing::debug!(released, "tree reset");
        released
    }

    /// Depth-first, pre-order search for `value`
    pub fn find_with_path(&self, value: Value) -> SearchState<'_> {
        let Some(root) = &self.root else {
            return SearchState::default();
        };

        let mut path = Vec::new();
        if search(root, value, &mut path) {
            SearchState {
                outcome: SearchOutcome::Found,
                path,
            }
        } else {
            SearchState {
                outcome: SearchOutcome::NotFoundHere,
                path,
            }
        }
    }
}

fn collect_values(node: &Node, out: &mut Vec<Value>) {
    out.push(node.value());
    for child in node.children() {
        collect_values(child, out);
    }
}

/// Returns the depth of the attached node, or `None` if nothing matched.
/// The budget only gates eligibility of a match; it is passed down unchanged.
fn attach(
    node: &mut Node,
    value: Value,
    parent: Value,
    depth_budget: u32,
    depth: usize,
) -> Result<Option<usize>, TreeError> {
    if node.value() == parent && depth_budget > 1 {
        if node.is_full() {
            return Err(TreeError::CapacityExceeded {
                parent,
                capacity: MAX_CHILDREN,
            });
        }
        node.push_child(Node::leaf(value));
        return Ok(Some(depth + 1));
    }

    for child in node.children_mut() {
        if let Some(found) = attach(child, value, parent, depth_budget, depth + 1)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// Scans a node's direct children first, then descends into them in order.
fn detach(node: &mut Node, value: Value) -> Option<usize> {
    let children = node.children_mut();
    if let Some(index) = children.iter().position(|child| child.value() == value) {
        let removed = children.remove(index);
        return Some(delete_subtree(Some(removed)));
    }

    children.iter_mut().find_map(|child| detach(child, value))
}

fn search<'a>(node: &'a Node, value: Value, path: &mut Vec<&'a Node>) -> bool {
    path.push(node);
    if node.value() == value {
        return true;
    }
    for child in node.children() {
        if search(child, value, path) {
            return true;
        }
    }
    path.pop();
    false
}
