use clap::ValueEnum;
use serde::Serialize;
use subnet_resolver_application::ports::CacheStats;
use subnet_resolver_domain::Subnet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    subnets: &'a [Subnet],
    cache: JsonCacheStats,
    lookups: u64,
}

#[derive(Serialize)]
struct JsonCacheStats {
    entries: usize,
    hits: u64,
    misses: u64,
    insertions: u64,
    evictions: u64,
    hit_rate: f64,
}

impl From<CacheStats> for JsonCacheStats {
    fn from(stats: CacheStats) -> Self {
        Self {
            entries: stats.entries,
            hits: stats.hits,
            misses: stats.misses,
            insertions: stats.insertions,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate(),
        }
    }
}

pub fn render(
    format: OutputFormat,
    subnets: &[Subnet],
    stats: CacheStats,
    lookups: u64,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let report = JsonReport {
                subnets,
                cache: stats.into(),
                lookups,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        OutputFormat::Text => Ok(render_text(subnets, stats, lookups)),
    }
}

fn render_text(subnets: &[Subnet], stats: CacheStats, lookups: u64) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<26} {:<16} {:<22} {:<18}\n",
        "SUBNET", "ZONE", "VPC", "CIDR"
    ));
    for subnet in subnets {
        out.push_str(&format!(
            "{:<26} {:<16} {:<22} {:<18}\n",
            subnet.subnet_id,
            subnet.availability_zone,
            subnet.vpc_id.as_deref().unwrap_or("-"),
            subnet.cidr_block.as_deref().unwrap_or("-"),
        ));
    }

    out.push_str(&format!(
        "\n{} subnet(s); lookups: {}; cache: {} entries, {} hits, {} misses ({:.1}% hit rate)\n",
        subnets.len(),
        lookups,
        stats.entries,
        stats.hits,
        stats.misses,
        stats.hit_rate(),
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subnets() -> Vec<Subnet> {
        vec![
            Subnet::new("subnet-0a1", "us-west-2a").with_vpc("vpc-main"),
            Subnet::new("subnet-0b2", "us-west-2b"),
        ]
    }

    fn stats() -> CacheStats {
        CacheStats {
            entries: 1,
            hits: 2,
            misses: 1,
            insertions: 1,
            evictions: 0,
        }
    }

    #[test]
    fn test_text_lists_each_subnet() {
        let text = render(OutputFormat::Text, &subnets(), stats(), 1).unwrap();

        assert!(text.starts_with("SUBNET"));
        assert!(text.contains("subnet-0a1"));
        assert!(text.contains("vpc-main"));
        assert!(text.contains("2 subnet(s); lookups: 1"));
        assert!(text.contains("66.7% hit rate"));
    }

    #[test]
    fn test_json_report_shape() {
        let json = render(OutputFormat::Json, &subnets(), stats(), 1).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["subnets"].as_array().unwrap().len(), 2);
        assert_eq!(value["subnets"][0]["subnet_id"], "subnet-0a1");
        assert_eq!(value["cache"]["hits"], 2);
        assert_eq!(value["lookups"], 1);
        assert!(value["subnets"][1].get("vpc_id").is_none());
    }
}
