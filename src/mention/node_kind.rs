use std::fmt;

use serde_json::Value;

/// Shape of a suggestion tree node, shown next to candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            Value::String(_) => NodeKind::String,
            Value::Number(_) => NodeKind::Number,
            Value::Bool(_) => NodeKind::Boolean,
            Value::Null => NodeKind::Null,
        }
    }

    /// Containers can be descended into with another `.`
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Object => "Object",
            NodeKind::Array => "Array",
            NodeKind::String => "String",
            NodeKind::Number => "Number",
            NodeKind::Boolean => "Boolean",
            NodeKind::Null => "Null",
        };
        f.write_str(label)
    }
}
