#![allow(dead_code)]

use std::sync::Arc;
use subnet_resolver_domain::{build_filters, Fingerprint, Subnet, SubnetSelector};

pub fn sample_inventory() -> Vec<Subnet> {
    vec![
        Subnet::new("subnet-0a1", "us-west-2a")
            .with_vpc("vpc-main")
            .with_arn("arn:aws:ec2:us-west-2:123456789012:subnet/subnet-0a1")
            .with_cidr("10.0.1.0/24")
            .with_tag("env", "prod")
            .with_tag("kubernetes.io/cluster/main", "owned"),
        Subnet::new("subnet-0b2", "us-west-2b")
            .with_vpc("vpc-main")
            .with_arn("arn:aws:ec2:us-west-2:123456789012:subnet/subnet-0b2")
            .with_cidr("10.0.2.0/24")
            .with_tag("env", "prod"),
        Subnet::new("subnet-0c3", "us-west-2c")
            .with_vpc("vpc-dev")
            .with_cidr("10.1.3.0/24")
            .with_tag("env", "dev")
            .with_tag("kubernetes.io/cluster/main", "shared"),
    ]
}

pub fn fingerprint_for(selector: &SubnetSelector) -> Fingerprint {
    build_filters(selector).fingerprint().unwrap()
}

pub fn subnets(ids: &[&str]) -> Arc<[Subnet]> {
    ids.iter()
        .map(|id| Subnet::new(*id, "us-west-2a"))
        .collect::<Vec<_>>()
        .into()
}
