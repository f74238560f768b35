// identifiers and field kinds shared by the store and the projection
use serde::{Deserialize, Serialize};

pub type FieldId = u32;

/// The type a field is declared with.
///
/// `String` and `Number` are scalars and project to a placeholder token.
/// `Group` projects to a nested mapping built from its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    String,
    Number,
    Group,
}

impl FieldKind {
    pub fn is_group(self) -> bool {
        matches!(self, FieldKind::Group)
    }

    pub fn is_scalar(self) -> bool {
        !self.is_group()
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Group => "group",
        };
        f.write_str(s)
    }
}

/// A single-property change applied by `update_field`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "property", content = "value", rename_all = "lowercase")]
pub enum FieldUpdate {
    Name(String),
    Kind(FieldKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_kind_is_string() {
        assert_eq!(FieldKind::default(), FieldKind::String);
        assert!(FieldKind::String.is_scalar());
        assert!(FieldKind::Group.is_group());
    }

    #[test]
    fn update_serializes_as_property_value_pair() {
        let json = serde_json::to_string(&FieldUpdate::Kind(FieldKind::Group)).unwrap();
        assert_eq!(json, r#"{"property":"kind","value":"group"}"#);

        let back: FieldUpdate =
            serde_json::from_str(r#"{"property":"name","value":"title"}"#).unwrap();
        assert_eq!(back, FieldUpdate::Name("title".into()));
    }
}
