//! Example demonstrating single-key accessors

use chrono::{DateTime, Utc};
use envtree::Getter;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    std::env::set_var("JOBS_WORKERS", "4");
    std::env::set_var("JOBS_QUEUES", "mail,sms,push");
    std::env::set_var("JOBS_STARTED_AT", "2024-04-16T09:30:00Z");

    // Missing or malformed values fall back to the zero value
    let env = Getter::with_prefix("JOBS");
    let workers: usize = env.get("WORKERS");
    let queues: Vec<String> = env.get("QUEUES");
    let started_at: DateTime<Utc> = env.get("STARTED_AT");
    let poll = env.get_or("POLL_INTERVAL", Duration::from_secs(5));

    println!("Workers: {workers}");
    println!("Queues: {queues:?}");
    println!("Started at: {started_at}");
    println!("Poll interval: {poll:?}");

    // Free functions read keys verbatim
    let workers: u8 = envtree::get("JOBS_WORKERS");
    println!("Workers (free function): {workers}");

    Ok(())
}
