//! Loading and saving SilverStripe YAML config fragments
//!
//! A fragment is usually a header document (`Name:`, `After:`) followed by
//! the config itself, separated by `---`. Every document is kept so that
//! untouched keys round-trip with the same structure and values. Comments
//! are not preserved.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{self, Result};

const DOCUMENT_START: &str = "---\n";

/// All documents of a YAML file, in order
#[derive(Debug, Clone, PartialEq)]
pub struct YamlDocuments {
    path: PathBuf,
    documents: Vec<Value>,
    explicit_start: bool,
}

impl YamlDocuments {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let mut documents = Vec::new();
        for document in serde_yaml::Deserializer::from_str(content) {
            let value =
                Value::deserialize(document).map_err(|e| error::config::parse_failed(path, e))?;
            documents.push(value);
        }

        if documents.is_empty() {
            documents.push(Value::Mapping(Mapping::new()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            documents,
            explicit_start: content.trim_start().starts_with("---"),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| error::fs::read_failed(path, e))?;
        Self::parse(path, &content)
    }

    pub fn save(&self) -> Result<()> {
        let content = self.to_yaml_string()?;
        fs::write(&self.path, content).map_err(|e| error::fs::write_failed(&self.path, e))
    }

    #[cfg(test)]
    pub fn documents(&self) -> &[Value] {
        &self.documents
    }

    /// The mapping that should receive edits to top-level `key`.
    ///
    /// That is the first document already holding `key`, otherwise the last
    /// mapping document. A document that is not a mapping is replaced by one.
    pub fn target_mut(&mut self, key: &str) -> &mut Mapping {
        let index = self
            .documents
            .iter()
            .position(|doc| doc.as_mapping().is_some_and(|map| map.contains_key(key)))
            .or_else(|| self.documents.iter().rposition(Value::is_mapping))
            .unwrap_or(self.documents.len() - 1);

        as_mapping(&mut self.documents[index])
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        let multi = self.explicit_start || self.documents.len() > 1;
        let mut out = String::new();

        for document in &self.documents {
            if multi {
                out.push_str(DOCUMENT_START);
            }
            if document.is_null() && multi {
                continue;
            }
            let yaml = serde_yaml::to_string(document)
                .map_err(|e| error::config::parse_failed(&self.path, e))?;
            out.push_str(&yaml);
        }

        Ok(out)
    }
}

/// Turn `value` into a mapping if it is not one already
fn as_mapping(value: &mut Value) -> &mut Mapping {
    if !value.is_mapping() {
        *value = Value::Mapping(Mapping::new());
    }
    let Value::Mapping(map) = value else {
        unreachable!("value was just replaced with a mapping")
    };
    map
}

/// Get the mapping stored under `key`, creating or replacing it as needed
pub fn child_mapping<'a>(parent: &'a mut Mapping, key: &str) -> &'a mut Mapping {
    let slot = parent
        .entry(Value::String(key.to_string()))
        .or_insert(Value::Null);
    as_mapping(slot)
}

/// Get the sequence stored under `key`, creating or replacing it as needed
pub fn child_sequence<'a>(parent: &'a mut Mapping, key: &str) -> &'a mut Vec<Value> {
    let slot = parent
        .entry(Value::String(key.to_string()))
        .or_insert(Value::Null);
    if !slot.is_sequence() {
        *slot = Value::Sequence(Vec::new());
    }
    let Value::Sequence(seq) = slot else {
        unreachable!("value was just replaced with a sequence")
    };
    seq
}

/// YAML value for an optional string, `null` when absent
pub fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.to_string()))
}
