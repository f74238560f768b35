// removing fields together with their subtrees
use tracing::debug;

use crate::core::tree::{FieldTree, Result, TreeError};
use crate::core::types::FieldId;

impl FieldTree {
    /// Remove `id` and everything below it, wherever it sits.
    ///
    /// Returns `false` and leaves the tree untouched when `id` is unknown.
    pub fn delete_field(&mut self, id: FieldId) -> bool {
        match self.try_delete_field(id) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, "delete_field ignored");
                false
            }
        }
    }

    /// Like `delete_field`, returning the removed ids in pre-order.
    pub fn try_delete_field(&mut self, id: FieldId) -> Result<Vec<FieldId>> {
        let parent = self
            .nodes
            .get(&id)
            .ok_or(TreeError::FieldNotFound(id))?
            .parent;

        //detach from whichever sequence lists it
        let siblings = match parent {
            None => &mut self.roots,
            Some(p) => {
                &mut self
                    .nodes
                    .get_mut(&p)
                    .ok_or(TreeError::DanglingChild { parent: p, child: id })?
                    .children
            }
        };
        siblings.retain(|&x| x != id);

        //drop the subtree; descendants are only reachable through it
        let removed = self.subtree(id);
        for gone in &removed {
            self.nodes.remove(gone);
        }

        debug!(id = %id, removed = removed.len(), "field deleted");
        Ok(removed)
    }
}
