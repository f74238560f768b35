//! Editor session: the seam the presentation layer drives.
//!
//! Each [`Intent`] is applied to the field tree and answered with a fresh
//! [`Preview`], re-projected from scratch. Intents naming unknown ids change
//! nothing; the [`Outcome`] says whether they landed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::project::{Document, project_with};
use crate::core::tree::FieldTree;
use crate::core::types::{FieldId, FieldKind, FieldUpdate};
use crate::preview::config::PreviewConfig;
use crate::preview::render::{RenderError, render};

/// Log target the submitted document is written to.
pub const SUBMIT_TARGET: &str = "schema_sketch::submit";

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    AddField { parent: Option<FieldId> },
    Rename { id: FieldId, name: String },
    Retype { id: FieldId, kind: FieldKind },
    Delete { id: FieldId },
    Submit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `attached` is false when the parent was missing; the id is spent anyway.
    Added { id: FieldId, attached: bool },
    Updated { found: bool },
    Deleted { found: bool },
    Submitted,
}

impl Outcome {
    /// Whether the intent changed or emitted anything.
    pub fn took_effect(&self) -> bool {
        match *self {
            Outcome::Added { attached, .. } => attached,
            Outcome::Updated { found } | Outcome::Deleted { found } => found,
            Outcome::Submitted => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub document: Document,
    pub text: String,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    tree: FieldTree,
    config: PreviewConfig,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PreviewConfig) -> Self {
        Self {
            tree: FieldTree::new(),
            config,
        }
    }

    pub fn tree(&self) -> &FieldTree {
        &self.tree
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// Independent copy of the current tree.
    pub fn snapshot(&self) -> FieldTree {
        self.tree.clone()
    }

    /// Current preview without applying anything.
    pub fn preview(&self) -> Result<Preview, RenderError> {
        self.build_preview(None)
    }

    /// Apply one intent and return the re-projected preview.
    ///
    /// Errors only come from rendering the preview text; unknown ids never
    /// fail.
    pub fn apply(&mut self, intent: Intent) -> Result<Preview, RenderError> {
        debug!(?intent, "applying intent");

        let outcome = match intent {
            Intent::AddField { parent } => {
                let id = self.tree.add_field(parent);
                Outcome::Added {
                    id,
                    attached: self.tree.contains(id),
                }
            }
            Intent::Rename { id, name } => Outcome::Updated {
                found: self.tree.update_field(id, FieldUpdate::Name(name)),
            },
            Intent::Retype { id, kind } => Outcome::Updated {
                found: self.tree.update_field(id, FieldUpdate::Kind(kind)),
            },
            Intent::Delete { id } => Outcome::Deleted {
                found: self.tree.delete_field(id),
            },
            Intent::Submit => {
                let preview = self.build_preview(Some(Outcome::Submitted))?;
                self.submit(&preview.text);
                return Ok(preview);
            }
        };

        self.build_preview(Some(outcome))
    }

    /// Emit the document to the log sink. Nothing else happens on submit.
    fn submit(&self, text: &str) {
        info!(
            target: SUBMIT_TARGET,
            fields = self.tree.len(),
            document = %text,
            "schema submitted"
        );
    }

    fn build_preview(&self, outcome: Option<Outcome>) -> Result<Preview, RenderError> {
        let document = project_with(&self.tree, &self.config);
        let text = render(&document, self.config.format)?;
        Ok(Preview {
            document,
            text,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::preview::render::RenderFormat;

    fn added_id(p: &Preview) -> FieldId {
        match p.outcome {
            Some(Outcome::Added { id, .. }) => id,
            other => panic!("expected Added, got {other:?}"),
        }
    }

    #[test]
    fn intents_drive_the_preview() {
        let mut s = EditorSession::new();

        let p = s.apply(Intent::AddField { parent: None }).unwrap();
        let group = added_id(&p);
        assert_eq!(p.document.into_value(), json!({}));

        s.apply(Intent::Rename { id: group, name: "age_info".into() }).unwrap();
        s.apply(Intent::Retype { id: group, kind: FieldKind::Group }).unwrap();

        let child = added_id(&s.apply(Intent::AddField { parent: Some(group) }).unwrap());
        s.apply(Intent::Rename { id: child, name: "count".into() }).unwrap();
        let p = s.apply(Intent::Retype { id: child, kind: FieldKind::Number }).unwrap();

        assert_eq!(p.outcome, Some(Outcome::Updated { found: true }));
        assert_eq!(
            p.document.into_value(),
            json!({"age_info": {"count": "number"}})
        );
        assert_eq!(p.text, "{\n  \"age_info\": {\n    \"count\": \"number\"\n  }\n}");
    }

    #[test]
    fn unknown_ids_report_no_effect() {
        let mut s = EditorSession::new();

        let p = s.apply(Intent::AddField { parent: Some(9) }).unwrap();
        assert_eq!(p.outcome, Some(Outcome::Added { id: 1, attached: false }));
        assert!(!p.outcome.unwrap().took_effect());

        let p = s.apply(Intent::Delete { id: 9 }).unwrap();
        assert_eq!(p.outcome, Some(Outcome::Deleted { found: false }));

        let p = s.apply(Intent::Rename { id: 9, name: "x".into() }).unwrap();
        assert_eq!(p.outcome, Some(Outcome::Updated { found: false }));

        assert!(s.tree().is_empty());
        assert_eq!(s.tree().next_id(), 2);
    }

    #[test]
    #[traced_test]
    fn submit_only_logs_the_document() {
        let mut s = EditorSession::new();
        let id = added_id(&s.apply(Intent::AddField { parent: None }).unwrap());
        s.apply(Intent::Rename { id, name: "title".into() }).unwrap();
        let before = s.snapshot();

        let p = s.apply(Intent::Submit).unwrap();

        assert_eq!(p.outcome, Some(Outcome::Submitted));
        assert_eq!(s.tree(), &before);
        assert!(logs_contain("schema submitted"));
        assert!(logs_contain("title"));
    }

    #[test]
    fn toon_config_renders_toon_text() {
        let mut s = EditorSession::with_config(PreviewConfig::default().with_format(RenderFormat::Toon));
        let id = added_id(&s.apply(Intent::AddField { parent: None }).unwrap());

        let p = s.apply(Intent::Rename { id, name: "title".into() }).unwrap();

        assert!(p.text.contains("title: STRING"), "got: {}", p.text);
    }

    #[test]
    fn intents_deserialize_from_tagged_json() {
        let i: Intent = serde_json::from_str(r#"{"intent":"retype","id":3,"kind":"group"}"#).unwrap();
        assert_eq!(i, Intent::Retype { id: 3, kind: FieldKind::Group });

        let i: Intent = serde_json::from_str(r#"{"intent":"add_field","parent":null}"#).unwrap();
        assert_eq!(i, Intent::AddField { parent: None });

        let i: Intent = serde_json::from_str(r#"{"intent":"submit"}"#).unwrap();
        assert_eq!(i, Intent::Submit);
    }
}
