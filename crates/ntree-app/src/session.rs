// ABOUTME: Caller-side state around the tree: input fields, last search and status line.
// ABOUTME: Applies commands to the store and assembles the frame to render.

use ntree_core::Config;
use ntree_layout::{RadialLayout, SearchTrace};
use ntree_render::Scene;
use ntree_store::{TreeStore, Value};

use crate::script::Command;

/// The three numbers the user edits between commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputFields {
    pub value: Value,
    pub parent: Value,
    /// Depth budget for the next insertion
    pub level: u32,
}

impl Default for InputFields {
    fn default() -> Self {
        Self {
            value: 0,
            parent: 0,
            level: 1,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    tree: TreeStore,
    fields: InputFields,
    layout: RadialLayout,
    width: u32,
    height: u32,
    search: Option<SearchTrace>,
    status: Option<String>,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            tree: TreeStore::new(),
            fields: InputFields::default(),
            layout: RadialLayout::from_config(config),
            width: config.width,
            height: config.height,
            search: None,
            status: None,
        }
    }

    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    pub fn fields(&self) -> InputFields {
        self.fields
    }

    pub fn search(&self) -> Option<&SearchTrace> {
        self.search.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn apply(&mut self, command: Command) {
        tracing::debug!(?command, "applying");
        match command {
            Command::SetValue(v) => self.fields.value = v,
            Command::SetParent(p) => self.fields.parent = p,
            Command::SetLevel(l) => self.fields.level = l,
            Command::Insert { value, parent } => {
                if let Some(v) = value {
                    self.fields.value = v;
                }
                if let Some(p) = parent {
                    self.fields.parent = p;
                }
                self.insert();
            }
            Command::Delete(value) => {
                if let Some(v) = value {
                    self.fields.value = v;
                }
                self.delete();
            }
            Command::Reset => self.reset(),
            Command::Search(value) => {
                if let Some(v) = value {
                    self.fields.value = v;
                }
                self.run_search();
            }
        }
    }

    fn insert(&mut self) {
        let InputFields {
            value,
            parent,
            level,
        } = self.fields;

        match self.tree.insert(value, parent, level) {
            Ok(insertion) if insertion.inserted() => {
                tracing::info!(
                    value,
                    ?insertion,
                    "Inserted node, total nodes: {}",
                    self.tree.len()
                );
                self.fields.value = 0;
                self.fields.level = level.saturating_add(1);
                self.search = None;
                self.status = None;
            }
            Ok(_) => {
                self.status = Some(format!(
                    "No node {} can take children at level {}",
                    parent, level
                ));
            }
            Err(e) => {
                self.status = Some(e.to_string());
            }
        }
    }

    fn delete(&mut self) {
        let released = self.tree.delete_by_value(self.fields.value);
        tracing::info!(
            value = self.fields.value,
            released,
            "Deleted subtree, remaining nodes: {}",
            self.tree.len()
        );
        self.fields.value = 0;
        self.search = None;
        self.status = None;
    }

    fn reset(&mut self) {
        let released = self.tree.reset();
        tracing::info!(released, "Tree reset");
        self.search = None;
        self.status = None;
    }

    fn run_search(&mut self) {
        let trace = self
            .layout
            .compute_search_positions(self.tree.root(), self.fields.value);
        tracing::info!(value = self.fields.value, outcome = ?trace.outcome, "Search finished");
        self.search = Some(trace);
    }

    /// Everything to draw for the current state
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new(self.width, self.height);
        scene.add_tree(&self.layout.compute_positions(self.tree.root()));
        if let Some(trace) = &self.search {
            scene.add_search(trace);
        }
        if let Some(status) = &self.status {
            scene.add_status(status);
        }
        scene
    }
}
