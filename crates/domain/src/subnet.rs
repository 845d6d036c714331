use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A discovered subnet, passed through from the lookup collaborator unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub subnet_id: String,
    pub availability_zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_ip_address_count: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl Subnet {
    pub fn new(subnet_id: impl Into<String>, availability_zone: impl Into<String>) -> Self {
        Self {
            subnet_id: subnet_id.into(),
            availability_zone: availability_zone.into(),
            subnet_arn: None,
            vpc_id: None,
            cidr_block: None,
            available_ip_address_count: None,
            tags: BTreeMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    pub fn with_vpc(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }

    pub fn with_arn(mut self, arn: impl Into<String>) -> Self {
        self.subnet_arn = Some(arn.into());
        self
    }

    pub fn with_cidr(mut self, cidr: impl Into<String>) -> Self {
        self.cidr_block = Some(cidr.into());
        self
    }

    /// `"<id> (<zone>)"`, the form used in discovery logs.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.subnet_id, self.availability_zone)
    }
}

pub fn summarize_subnets(subnets: &[Subnet]) -> Vec<String> {
    subnets.iter().map(Subnet::summary).collect()
}
