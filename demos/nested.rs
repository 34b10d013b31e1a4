//! Example demonstrating nested structs
//!
//! Keys compose across levels: `SHOP` + `DB` + `POOL` + `SIZE` is read from
//! `SHOP_DB_POOL_SIZE`.

use envtree::EnvStruct;
use std::time::Duration;

#[derive(Debug, Default, EnvStruct)]
struct Pool {
    #[env("SIZE,default=4")]
    pub size: u32,
    #[env("IDLE_TIMEOUT,default=5m")]
    pub idle_timeout: Duration,
}

#[derive(Debug, Default, EnvStruct)]
struct Database {
    #[env("URL")]
    pub url: Option<url::Url>,
    #[env("POOL")]
    pub pool: Pool,
}

#[derive(Debug, Default, EnvStruct)]
#[env(prefix = "SHOP")]
struct Config {
    #[env("DB")]
    pub db: Database,

    // Allocated and walked even though no variable names it directly
    #[env("CACHE_DB")]
    pub cache_db: Option<Database>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    std::env::set_var("SHOP_DB_URL", "postgres://db.internal/shop");
    std::env::set_var("SHOP_DB_POOL_SIZE", "16");
    std::env::set_var("SHOP_CACHE_DB_POOL_IDLE_TIMEOUT", "30s");

    let config = Config::from_env()?;

    println!("Nested configuration loaded:");
    println!("  DB URL: {:?}", config.db.url.as_ref().map(|u| u.as_str()));
    println!("  DB pool size: {}", config.db.pool.size);
    println!("  DB idle timeout: {:?}", config.db.pool.idle_timeout);
    if let Some(cache) = &config.cache_db {
        println!("  Cache pool size: {}", cache.pool.size);
        println!("  Cache idle timeout: {:?}", cache.pool.idle_timeout);
    }

    Ok(())
}
