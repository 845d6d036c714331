use serde::{Deserialize, Serialize};
use std::fmt;

use crate::SubnetSelector;

pub const SUBNET_ID_KEY: &str = "subnet-id";
pub const SUBNET_ARN_KEY: &str = "subnet-arn";
pub const TAG_KEY_FILTER: &str = "tag-key";
pub const TAG_FILTER_PREFIX: &str = "tag:";
pub const WILDCARD: &str = "*";

/// One matching criterion against the provider's subnet inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterClause {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Values")]
    pub values: Vec<String>,
}

impl FilterClause {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Ordered clauses derived from a selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet(Vec<FilterClause>);

impl FilterSet {
    pub fn clauses(&self) -> &[FilterClause] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FilterClause>> for FilterSet {
    fn from(clauses: Vec<FilterClause>) -> Self {
        Self(clauses)
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterClause;
    type IntoIter = std::slice::Iter<'a, FilterClause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Concise single-line rendering used in errors and logs.
impl fmt::Display for FilterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, clause) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{{\"Name\":{:?},\"Values\":[", clause.name)?;
            for (j, value) in clause.values.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{value:?}")?;
            }
            f.write_str("]}")?;
        }
        f.write_str("]")
    }
}

/// How a single selector entry is matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorTerm<'a> {
    /// `subnet-id` / `subnet-arn`: comma-separated explicit identifiers.
    ExplicitIds { key: &'a str, ids: Vec<String> },
    /// `"*"` value: the tag must be present, any value.
    TagPresent { key: &'a str },
    /// Exact tag value match.
    TagEquals { key: &'a str, value: &'a str },
}

impl<'a> SelectorTerm<'a> {
    pub fn classify(key: &'a str, value: &'a str) -> Self {
        match (key, value) {
            (SUBNET_ID_KEY | SUBNET_ARN_KEY, _) => Self::ExplicitIds {
                key,
                ids: split_comma_separated(value),
            },
            (_, WILDCARD) => Self::TagPresent { key },
            _ => Self::TagEquals { key, value },
        }
    }

    pub fn into_clause(self) -> FilterClause {
        match self {
            Self::ExplicitIds { key, ids } => FilterClause::new(key, ids),
            Self::TagPresent { key } => FilterClause::new(TAG_KEY_FILTER, vec![key.to_string()]),
            Self::TagEquals { key, value } => {
                FilterClause::new(format!("{TAG_FILTER_PREFIX}{key}"), vec![value.to_string()])
            }
        }
    }
}

/// Translate a selector into provider filter clauses, one per entry, in
/// selector order. Repeated keys produce repeated clauses.
pub fn build_filters(selector: &SubnetSelector) -> FilterSet {
    selector
        .iter()
        .map(|(key, value)| SelectorTerm::classify(key, value).into_clause())
        .collect::<Vec<_>>()
        .into()
}

fn split_comma_separated(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_empty_pieces() {
        assert_eq!(split_comma_separated("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_subnet_arn_wildcard_is_not_tag_key() {
        let term = SelectorTerm::classify("subnet-arn", "*");
        assert_eq!(
            term,
            SelectorTerm::ExplicitIds {
                key: "subnet-arn",
                ids: vec!["*".to_string()],
            }
        );
    }

    #[test]
    fn test_display_is_concise_json() {
        let filters = FilterSet::from(vec![
            FilterClause::new("tag:env", vec!["prod".to_string()]),
            FilterClause::new("subnet-id", vec!["sn-1".to_string(), "sn-2".to_string()]),
        ]);
        assert_eq!(
            filters.to_string(),
            r#"[{"Name":"tag:env","Values":["prod"]},{"Name":"subnet-id","Values":["sn-1","sn-2"]}]"#
        );
    }
}
