//! Schemaless catalog records.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// One row of a catalog: named fields holding strings or primitives.
///
/// The schema depends on the catalog and is never enforced; a record has no
/// identity beyond its position in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub serde_json::Map<String, serde_json::Value>);

impl Record {
    /// Build a record from string pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Record(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), serde_json::Value::String(v.into())))
                .collect(),
        )
    }

    /// Text of a field. Missing, null and nested values read as "".
    pub fn field(&self, name: &str) -> Cow<'_, str> {
        match self.0.get(name) {
            Some(serde_json::Value::String(s)) => Cow::Borrowed(s.as_str()),
            Some(serde_json::Value::Number(n)) => Cow::Owned(n.to_string()),
            Some(serde_json::Value::Bool(b)) => Cow::Owned(b.to_string()),
            _ => Cow::Borrowed(""),
        }
    }

    /// Lower-cased concatenation of `fields`, space separated.
    pub fn haystack(&self, fields: &[&str]) -> String {
        fields
            .iter()
            .map(|f| self.field(f))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

/// Shorten a postal address to its last two parts ("City, State").
pub fn city_state(address: &str) -> Cow<'_, str> {
    let parts: Vec<&str> = address
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() > 1 {
        Cow::Owned(parts[parts.len() - 2..].join(", "))
    } else {
        Cow::Borrowed(address)
    }
}
