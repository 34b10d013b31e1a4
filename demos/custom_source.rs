//! Example demonstrating custom key transforms and value sources

use envtree::{EnvStruct, MapSource, Parser};
use std::collections::HashMap;

#[derive(Debug, Default, EnvStruct)]
struct Worker {
    #[env("THREADS,default=2")]
    pub threads: usize,
    #[env("QUEUE,default=default")]
    pub queue: String,
}

#[derive(Debug, Default, EnvStruct)]
#[env(prefix = "APP")]
struct Config {
    #[env("WORKER")]
    pub worker: Worker,
}

fn main() -> anyhow::Result<()> {
    // Fixed values, e.g. for tests
    let parser = Parser::builder()
        .source(MapSource::new().with("APP_WORKER_THREADS", "8"))
        .build();
    let config = Config::from_parser(&parser)?;
    println!("From a map: {config:?}");

    // Keys as `app/worker/queue` against a closure-backed store
    let store: HashMap<String, String> =
        HashMap::from([("app/worker/queue".to_string(), "priority".to_string())]);
    let parser = Parser::builder()
        .key_fn(|key| key.to_lowercase().replace('.', "/"))
        .source(move |key: &str, default: &str| {
            store
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        })
        .build();
    let config = Config::from_parser(&parser)?;
    println!("From a closure: {config:?}");

    Ok(())
}
