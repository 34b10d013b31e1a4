//! Example demonstrating sequences, maps and JSON values

use envtree::{EnvStruct, Json};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Deserialize)]
struct RateLimit {
    burst: u32,
    per_second: f64,
}

#[derive(Debug, Default, EnvStruct)]
#[env(prefix = "COLL")]
struct Config {
    // Split on the first of `,` `;` `-` or space that occurs
    #[env("ALLOWED_HOSTS,default=localhost;127.0.0.1")]
    pub allowed_hosts: Vec<String>,

    #[env("PORTS")]
    pub ports: Vec<u16>,

    // key:value pairs
    #[env("WEIGHTS,default=primary:0.8,replica:0.2")]
    pub weights: HashMap<String, f64>,

    // Spaces inside values survive when no separator yields pairs everywhere
    #[env("BANNERS,default=1:Hello world")]
    pub banners: BTreeMap<u32, String>,

    // Any serde type through JSON
    #[env("RATE_LIMIT")]
    pub rate_limit: Json<RateLimit>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("COLL_PORTS", "8080,8081,8082");
    std::env::set_var("COLL_RATE_LIMIT", r#"{"burst": 20, "per_second": 5.0}"#);

    let config = Config::from_env()?;

    println!("Collections loaded:");
    println!("  Allowed hosts: {:?}", config.allowed_hosts);
    println!("  Ports: {:?}", config.ports);
    println!("  Weights: {:?}", config.weights);
    println!("  Banners: {:?}", config.banners);
    println!(
        "  Rate limit: burst={} per_second={}",
        config.rate_limit.burst, config.rate_limit.per_second
    );

    Ok(())
}
