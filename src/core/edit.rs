// renaming and retyping fields in place
use tracing::debug;

use crate::core::tree::{FieldTree, Result, TreeError};
use crate::core::types::{FieldId, FieldUpdate};

impl FieldTree {
    /// Apply a name or kind change to the field `id`.
    ///
    /// Returns `false` and leaves the tree untouched when `id` is unknown.
    /// Only the addressed node changes; its children, siblings and ancestors
    /// are left as they were.
    pub fn update_field(&mut self, id: FieldId, update: FieldUpdate) -> bool {
        match self.try_update_field(id, update) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "update_field ignored");
                false
            }
        }
    }

    pub fn try_update_field(&mut self, id: FieldId, update: FieldUpdate) -> Result<()> {
        let node = self.nodes.get_mut(&id).ok_or(TreeError::FieldNotFound(id))?;

        match update {
            FieldUpdate::Name(name) => {
                debug!(id = %id, name = %name, "field renamed");
                node.name = name;
            }
            FieldUpdate::Kind(kind) => {
                // children is always present, so a new group starts with an
                // empty container and a returning group keeps what it had
                debug!(id = %id, from = %node.kind, to = %kind, "field retyped");
                node.kind = kind;
            }
        }

        Ok(())
    }

    /// Shorthand for `update_field(id, FieldUpdate::Name(..))`.
    pub fn rename_field(&mut self, id: FieldId, name: impl Into<String>) -> bool {
        self.update_field(id, FieldUpdate::Name(name.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FieldKind;

    #[test]
    fn rename_changes_only_the_target() {
        let mut t = FieldTree::new();
        let a = t.add_field(None);
        let b = t.add_field(None);

        assert!(t.rename_field(b, "title"));

        assert_eq!(t.get(a).unwrap().name, "");
        assert_eq!(t.get(b).unwrap().name, "title");
        assert_eq!(t.roots(), &[a, b]);
    }

    #[test]
    fn switching_to_group_yields_empty_children() {
        let mut t = FieldTree::new();
        let id = t.add_field(None);

        assert!(t.update_field(id, FieldUpdate::Kind(FieldKind::Group)));

        let n = t.get(id).unwrap();
        assert_eq!(n.kind, FieldKind::Group);
        assert_eq!(n.children, Vec::<FieldId>::new());
    }

    #[test]
    fn regrouping_preserves_existing_children() {
        let mut t = FieldTree::new();
        let g = t.add_field(None);
        t.update_field(g, FieldUpdate::Kind(FieldKind::Group));
        let c = t.add_field(Some(g));

        t.update_field(g, FieldUpdate::Kind(FieldKind::Number));
        t.update_field(g, FieldUpdate::Kind(FieldKind::Group));

        assert_eq!(t.children(g), &[c]);
        t.validate_structure().unwrap();
    }

    #[test]
    fn update_deep_field() {
        let mut t = FieldTree::new();
        let g = t.add_field(None);
        let mid = t.add_field(Some(g));
        let leaf = t.add_field(Some(mid));

        assert!(t.update_field(leaf, FieldUpdate::Kind(FieldKind::Number)));

        assert_eq!(t.get(leaf).unwrap().kind, FieldKind::Number);
        assert_eq!(t.get(mid).unwrap().kind, FieldKind::String);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut t = FieldTree::new();
        t.add_field(None);
        let before = t.clone();

        assert!(!t.update_field(77, FieldUpdate::Name("x".into())));
        assert_eq!(t, before);

        assert_eq!(
            t.try_update_field(77, FieldUpdate::Kind(FieldKind::Group)),
            Err(TreeError::FieldNotFound(77))
        );
    }

    #[test]
    fn snapshot_is_not_affected_by_later_update() {
        let mut t = FieldTree::new();
        let id = t.add_field(None);
        let snapshot = t.clone();

        t.rename_field(id, "changed");

        assert_eq!(snapshot.get(id).unwrap().name, "");
        assert_eq!(t.get(id).unwrap().name, "changed");
    }
}
