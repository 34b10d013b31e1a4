//! Basic usage example

use envtree::EnvStruct;
use std::time::Duration;

#[derive(Debug, Default, EnvStruct)]
#[env(prefix = "MYAPP")]
struct Config {
    // Loaded from MYAPP_DATABASE_URL
    #[env("DATABASE_URL")]
    pub database_url: String,

    // With default value
    #[env("SERVER_ADDR,default=127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env("MAX_CONNECTIONS,default=10")]
    pub max_connections: u32,

    // Boolean type
    #[env("DEBUG,default=false")]
    pub debug_mode: bool,

    // No annotation: key derived from the field name (MYAPP_REQUEST_TIMEOUT)
    pub request_timeout: Duration,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MYAPP_SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("MYAPP_REQUEST_TIMEOUT", "1m 30s");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Request Timeout: {:?}", config.request_timeout);

    Ok(())
}
