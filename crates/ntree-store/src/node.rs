// ABOUTME: Tree vertex with an integer payload and a bounded list of owned children.
// ABOUTME: Children always occupy a contiguous prefix; removal shifts the rest left.

/// Payload type of a node. Values are match keys but need not be unique.
pub type Value = i32;

/// Maximum number of children any node may hold
pub const MAX_CHILDREN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: Value,
    children: Vec<Node>,
}

impl Node {
    pub(crate) fn leaf(value: Value) -> Self {
        Self {
            value,
            children: Vec::with_capacity(MAX_CHILDREN),
        }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// Live children, left to right
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_full(&self) -> bool {
        self.children.len() >= MAX_CHILDREN
    }

    /// Number of nodes in this subtree, including `self`
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has height 1
    pub fn height(&self) -> usize {
        1 + self.children.iter().map(Node::height).max().unwrap_or(0)
    }

    /// Caller must have checked `is_full`.
    pub(crate) fn push_child(&mut self, child: Node) {
        debug_assert!(!self.is_full());
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }
}

impl Drop for Node {
    // Flatten the subtree onto a heap stack so deep chains don't recurse
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Release a node and all of its descendants, children before parents.
/// Returns how many nodes were released; `None` releases nothing.
pub fn delete_subtree(node: Option<Node>) -> usize {
    let Some(node) = node else {
        return 0;
    };

    // (node, children already queued)
    let mut stack = vec![(node, false)];
    let mut released = 0;
    while let Some((mut node, expanded)) = stack.pop() {
        if expanded {
            tracing::trace!(value = node.value, "released node");
            released += 1;
            continue;
        }
        let children = std::mem::take(&mut node.children);
        stack.push((node, true));
        stack.extend(children.into_iter().rev().map(|child| (child, false)));
    }
    released
}
