use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::DomainError;

/// Caller-supplied subnet selection criteria.
///
/// Entries keep the order they were added in and repeated keys are allowed.
/// Clause order feeds the fingerprint, so callers that start from an unordered
/// map should go through [`SubnetSelector::from_map`], which yields keys in
/// sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetSelector {
    entries: Vec<(String, String)>,
}

impl SubnetSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Parse a `key=value` pair as given on a command line.
    ///
    /// Only the first `=` separates key from value, so tag values may contain
    /// `=` themselves.
    pub fn parse_pair(raw: &str) -> Result<(String, String), DomainError> {
        let (key, value) = raw.split_once('=').ok_or_else(|| {
            DomainError::InvalidSelector(format!("expected key=value, got {raw:?}"))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(DomainError::InvalidSelector(format!("empty key in {raw:?}")));
        }

        Ok((key.to_string(), value.trim().to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubnetSelector {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for SubnetSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for SubnetSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for SubnetSelector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, String>::deserialize(deserializer).map(Self::from_map)
    }
}
