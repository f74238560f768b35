//! Core of a schema sketch editor.
//!
//! A [`FieldTree`] holds an ordered forest of named, typed fields in an arena
//! keyed by [`FieldId`]. Fields are added, renamed, retyped and deleted at any
//! depth; [`project`] turns the current tree into an ordered [`Document`] that
//! [`render`] prints as JSON or TOON. [`EditorSession`] ties the two together
//! for a presentation layer that forwards user intents.
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod core;
pub mod preview;
pub mod session;

pub use crate::core::project::{Document, project, project_with};
pub use crate::core::tree::{FieldNode, FieldTree, TreeError};
pub use crate::core::types::{FieldId, FieldKind, FieldUpdate};
pub use crate::preview::config::{ConfigError, PreviewConfig};
pub use crate::preview::render::{RenderError, RenderFormat, render};
pub use crate::session::{EditorSession, Intent, Outcome, Preview};
