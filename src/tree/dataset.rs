use std::io::Read;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::MalformedHierarchyError;

/// One record of the input dataset, before validation.
///
/// `{ "name": ..., "children": [...] }` for a group, `{ "name": ..., "value": ... }`
/// for an item. Nesting depth is arbitrary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub name: CompactString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RawNode>>,
}

/// A declared value. Published datasets often quote their numbers (`"20.08"`),
/// so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(CompactString),
}

impl RawValue {
    /// The numeric value, if it is a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            RawValue::Number(v) => *v,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        v.is_finite().then_some(v)
    }

    pub fn raw_text(&self) -> CompactString {
        match self {
            RawValue::Number(v) => compact_str::format_compact!("{v}"),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl RawNode {
    pub fn leaf(name: &str, value: f64) -> Self {
        Self {
            name: CompactString::new(name),
            value: Some(RawValue::Number(value)),
            children: None,
        }
    }

    pub fn branch(name: &str, children: Vec<RawNode>) -> Self {
        Self {
            name: CompactString::new(name),
            value: None,
            children: Some(children),
        }
    }
}

pub fn parse_dataset(text: &str) -> Result<RawNode, MalformedHierarchyError> {
    Ok(serde_json::from_str(text)?)
}

pub fn read_dataset(reader: impl Read) -> Result<RawNode, MalformedHierarchyError> {
    Ok(serde_json::from_reader(reader)?)
}
