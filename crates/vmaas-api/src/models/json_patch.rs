//! JSON Patch (RFC 6902) documents for `PATCH` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One operation of a JSON Patch document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: JsonPatchOp,
    /// JSON Pointer to the target location.
    pub path: String,
    /// Source location, for `move` and `copy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    pub fn new(op: JsonPatchOp, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    #[must_use]
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// A patchable type: an ordered table of JSON Pointer paths and the
/// current value at each (`None` when unset).
pub trait PatchFields {
    fn patch_fields(&self) -> Vec<(&'static str, Option<Value>)>;
}

/// Operations turning `old` into `new`, one per differing field.
pub fn diff<T: PatchFields>(old: &T, new: &T) -> Vec<JsonPatchOperation> {
    old.patch_fields()
        .into_iter()
        .zip(new.patch_fields())
        .filter_map(|((path, before), (_, after))| match (before, after) {
            (None, Some(value)) => {
                Some(JsonPatchOperation::new(JsonPatchOp::Add, path).with_value(value))
            }
            (Some(_), None) => Some(JsonPatchOperation::new(JsonPatchOp::Remove, path)),
            (Some(before), Some(value)) if before != value => {
                Some(JsonPatchOperation::new(JsonPatchOp::Replace, path).with_value(value))
            }
            _ => None,
        })
        .collect()
}
