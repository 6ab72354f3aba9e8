// ABOUTME: Bounded-arity tree storage for ntree.
// ABOUTME: Owns the node graph and implements insertion, deletion and search.

mod node;
mod store;

pub use node::{delete_subtree, Node, Value, MAX_CHILDREN};
pub use store::{Insertion, SearchOutcome, SearchState, TreeError, TreeStore};
