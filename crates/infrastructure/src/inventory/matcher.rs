use fancy_regex::Regex;
use subnet_resolver_domain::filter::{
    SUBNET_ARN_KEY, SUBNET_ID_KEY, TAG_FILTER_PREFIX, TAG_KEY_FILTER,
};
use subnet_resolver_domain::{DomainError, FilterSet, Subnet};

/// Subnet attribute a filter clause inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Field {
    SubnetId,
    SubnetArn,
    AvailabilityZone,
    VpcId,
    CidrBlock,
    TagKey,
    Tag(String),
}

impl Field {
    fn parse(name: &str) -> Result<Self, DomainError> {
        let field = match name {
            SUBNET_ID_KEY => Self::SubnetId,
            SUBNET_ARN_KEY => Self::SubnetArn,
            "availability-zone" => Self::AvailabilityZone,
            "vpc-id" => Self::VpcId,
            "cidr-block" => Self::CidrBlock,
            TAG_KEY_FILTER => Self::TagKey,
            name => match name.strip_prefix(TAG_FILTER_PREFIX) {
                Some(tag) => Self::Tag(tag.to_string()),
                None => {
                    return Err(DomainError::InvalidFilter(format!(
                        "unsupported filter name {name:?}"
                    )))
                }
            },
        };
        Ok(field)
    }
}

/// One filter value. EC2 filter wildcards: `*` is any run of characters,
/// `?` exactly one.
#[derive(Debug)]
pub enum ValuePattern {
    Exact(String),
    Wildcard(Regex),
}

impl ValuePattern {
    pub fn compile(raw: &str) -> Result<Self, DomainError> {
        if !raw.contains(|c| c == '*' || c == '?') {
            return Ok(Self::Exact(raw.to_string()));
        }

        let mut source = String::with_capacity(raw.len() + 8);
        source.push_str("(?s)^");
        let mut literal = String::new();
        for c in raw.chars() {
            match c {
                '*' | '?' => {
                    source.push_str(&fancy_regex::escape(&literal));
                    literal.clear();
                    source.push_str(if c == '*' { ".*" } else { "." });
                }
                c => literal.push(c),
            }
        }
        source.push_str(&fancy_regex::escape(&literal));
        source.push('$');

        Regex::new(&source)
            .map(Self::Wildcard)
            .map_err(|e| DomainError::InvalidFilter(format!("invalid filter value {raw:?}: {e}")))
    }

    pub fn matches(&self, actual: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == actual,
            Self::Wildcard(regex) => regex.is_match(actual).unwrap_or(false),
        }
    }
}

/// A filter set compiled once and evaluated against many subnets.
///
/// Clauses are ANDed together; the values of a single clause are ORed.
#[derive(Debug)]
pub struct FilterMatcher {
    clauses: Vec<(Field, Vec<ValuePattern>)>,
}

impl FilterMatcher {
    pub fn compile(filters: &FilterSet) -> Result<Self, DomainError> {
        let clauses = filters
            .into_iter()
            .map(|clause| {
                let field = Field::parse(&clause.name)?;
                let values = clause
                    .values
                    .iter()
                    .map(|v| ValuePattern::compile(v))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((field, values))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self { clauses })
    }

    pub fn matches(&self, subnet: &Subnet) -> bool {
        self.clauses
            .iter()
            .all(|(field, values)| clause_matches(subnet, field, values))
    }
}

fn clause_matches(subnet: &Subnet, field: &Field, values: &[ValuePattern]) -> bool {
    let any_of = |actual: Option<&str>| {
        actual.is_some_and(|actual| values.iter().any(|v| v.matches(actual)))
    };

    match field {
        Field::SubnetId => any_of(Some(subnet.subnet_id.as_str())),
        Field::SubnetArn => any_of(subnet.subnet_arn.as_deref()),
        Field::AvailabilityZone => any_of(Some(subnet.availability_zone.as_str())),
        Field::VpcId => any_of(subnet.vpc_id.as_deref()),
        Field::CidrBlock => any_of(subnet.cidr_block.as_deref()),
        Field::TagKey => subnet.tags.keys().any(|key| any_of(Some(key.as_str()))),
        Field::Tag(tag) => any_of(subnet.tags.get(tag).map(String::as_str)),
    }
}

/// Evaluate a filter set against one subnet.
pub fn matches_filters(subnet: &Subnet, filters: &FilterSet) -> Result<bool, DomainError> {
    Ok(FilterMatcher::compile(filters)?.matches(subnet))
}
