// field arena: node storage, id assignment, insertion and read access
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::types::{FieldId, FieldKind};

/// Result type for strict tree operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Conditions the lenient operations swallow and the `try_*` variants report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// The id was still consumed even though nothing was attached.
    #[error("parent field {parent} not found; field {id} was not attached")]
    ParentNotFound { parent: FieldId, id: FieldId },

    #[error("field {parent} lists child {child} which is not in the tree")]
    DanglingChild { parent: FieldId, child: FieldId },

    #[error("field {child} is listed under {listed_under:?} but points at {recorded:?}")]
    ParentMismatch {
        child: FieldId,
        listed_under: Option<FieldId>,
        recorded: Option<FieldId>,
    },

    #[error("field {0} is reachable more than once or not at all")]
    Unreachable(FieldId),
}

/// One field of the schema being edited.
///
/// `children` always exists, so a field switched to `Group` already has a
/// (possibly empty) container and a field switched away and back keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNode {
    pub id: FieldId,
    pub name: String,
    pub kind: FieldKind,
    pub parent: Option<FieldId>,
    pub children: Vec<FieldId>,
}

impl FieldNode {
    pub fn new(id: FieldId, parent: Option<FieldId>) -> Self {
        Self {
            id,
            name: String::new(),
            kind: FieldKind::String,
            parent,
            children: Vec::new(),
        }
    }

    /// Name with surrounding whitespace removed, or `None` if nothing is left.
    pub fn key(&self) -> Option<&str> {
        let trimmed = self.name.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Ordered forest of fields stored as an arena keyed by id.
///
/// Cloning yields an independent snapshot: later mutations of either value
/// never show through the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTree {
    pub(crate) nodes: HashMap<FieldId, FieldNode>,
    pub(crate) roots: Vec<FieldId>,
    next_id: FieldId,
}

impl Default for FieldTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldTree {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new blank `String` field at the root or under `parent`.
    ///
    /// The id counter advances even when `parent` does not exist; in that case
    /// nothing is attached and the returned id never becomes visible.
    pub fn add_field(&mut self, parent: Option<FieldId>) -> FieldId {
        let (id, attached) = self.insert_field(parent);
        if !attached {
            debug!(id = %id, parent = ?parent, "add_field: parent missing, nothing attached");
        }
        id
    }

    pub fn try_add_field(&mut self, parent: Option<FieldId>) -> Result<FieldId> {
        match self.insert_field(parent) {
            (id, true) => Ok(id),
            (id, false) => Err(TreeError::ParentNotFound {
                // only a `Some` parent can fail to attach
                parent: parent.unwrap_or_default(),
                id,
            }),
        }
    }

    fn insert_field(&mut self, parent: Option<FieldId>) -> (FieldId, bool) {
        let id = self.next_id;
        self.next_id += 1;

        match parent {
            None => self.roots.push(id),
            Some(p) => match self.nodes.get_mut(&p) {
                Some(parent_node) => parent_node.children.push(id),
                None => return (id, false),
            },
        }

        self.nodes.insert(id, FieldNode::new(id, parent));
        debug!(id = %id, parent = ?parent, "field added");
        (id, true)
    }

    //read access

    pub fn get(&self, id: FieldId) -> Option<&FieldNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn roots(&self) -> &[FieldId] {
        &self.roots
    }

    /// Children of `id` in insertion order; empty if `id` is unknown.
    pub fn children(&self, id: FieldId) -> &[FieldId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: FieldId) -> Option<FieldId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Number of fields reachable from the roots.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The id the next `add_field` call will hand out.
    pub fn next_id(&self) -> FieldId {
        self.next_id
    }

    /// Zero-based depth; roots are at depth 0.
    pub fn depth(&self, id: FieldId) -> Option<usize> {
        let mut node = self.nodes.get(&id)?;
        let mut depth = 0;
        while let Some(p) = node.parent {
            node = self.nodes.get(&p)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Ids in depth-first pre-order: each root, then its children in order.
    pub fn walk(&self) -> Vec<FieldId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<FieldId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// `id` and everything below it, pre-order. Empty if `id` is unknown.
    pub fn subtree(&self, id: FieldId) -> Vec<FieldId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.children(cur).iter().rev().copied());
        }
        out
    }

    /// Check the arena links: every listed child exists and points back at its
    /// lister, and every stored node is reachable from the roots exactly once.
    pub fn validate_structure(&self) -> Result<()> {
        let mut seen: HashSet<FieldId> = HashSet::with_capacity(self.nodes.len());

        let mut stack: Vec<(Option<FieldId>, FieldId)> =
            self.roots.iter().map(|&r| (None, r)).collect();

        while let Some((listed_under, id)) = stack.pop() {
            let node = match (self.nodes.get(&id), listed_under) {
                (Some(n), _) => n,
                (None, Some(parent)) => return Err(TreeError::DanglingChild { parent, child: id }),
                (None, None) => return Err(TreeError::FieldNotFound(id)),
            };

            if node.parent != listed_under {
                return Err(TreeError::ParentMismatch {
                    child: id,
                    listed_under,
                    recorded: node.parent,
                });
            }

            if !seen.insert(id) {
                return Err(TreeError::Unreachable(id));
            }

            stack.extend(node.children.iter().map(|&c| (Some(id), c)));
        }

        if let Some(&orphan) = self.nodes.keys().find(|id| !seen.contains(id)) {
            return Err(TreeError::Unreachable(orphan));
        }

        Ok(())
    }
}
