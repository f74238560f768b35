// tree -> preview document
/*
Rules, applied level by level starting at the roots:

    blank (after trim) name  -> field and its whole subtree skipped

    String                   -> string placeholder ("STRING")

    Number                   -> number placeholder ("number", still a string)

    Group                    -> nested mapping of its children

Sibling keys collide by trimmed name: the later field's value wins and the key
stays where it was first inserted.
*/
use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::tree::FieldTree;
use crate::core::types::{FieldId, FieldKind};
use crate::preview::config::PreviewConfig;

/// Ordered key/value sketch of the current tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_value()
    }
}

/// Project with the stock placeholders.
pub fn project(tree: &FieldTree) -> Document {
    project_with(tree, &PreviewConfig::default())
}

pub fn project_with(tree: &FieldTree, config: &PreviewConfig) -> Document {
    Document(project_level(tree, tree.roots(), config))
}

fn project_level(tree: &FieldTree, ids: &[FieldId], config: &PreviewConfig) -> Map<String, Value> {
    let mut out = Map::new();

    for &id in ids {
        let Some(node) = tree.get(id) else {
            continue;
        };
        let Some(key) = node.key() else {
            continue;
        };

        let value = match node.kind {
            FieldKind::String => Value::String(config.string_placeholder.clone()),
            FieldKind::Number => Value::String(config.number_placeholder.clone()),
            FieldKind::Group => Value::Object(project_level(tree, &node.children, config)),
        };

        out.insert(key.to_string(), value);
    }

    out
}

impl FieldTree {
    pub fn project(&self) -> Document {
        project(self)
    }
}
