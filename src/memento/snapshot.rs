use super::errors::{missing_field, MementoResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat mapping of field names to string values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Memento {
    fields: BTreeMap<String, String>,
}

impl Memento {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a missing field is an error
    pub fn require(&self, field: &str) -> MementoResult<&str> {
        self.get(field).ok_or_else(|| missing_field(field))
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> MementoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> MementoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Memento {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Types that can be captured into and rebuilt from a [`Memento`]
pub trait MementoConvertible: Sized {
    fn to_memento(&self) -> Memento;

    fn from_memento(memento: &Memento) -> MementoResult<Self>;
}
