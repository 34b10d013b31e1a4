//! Example demonstrating a type that parses its own subtree

use envtree::{EnvError, EnvStruct, ParseEnv};

#[derive(Debug, thiserror::Error)]
#[error("credentials under '{0}' need both a user and a password")]
struct IncompleteCredentials(String);

#[derive(Debug, Default, EnvStruct)]
#[env(custom)]
struct Credentials {
    user: String,
    password: String,
}

impl ParseEnv for Credentials {
    // `prefix` is the composed key of the field, e.g. `BILLING.UPSTREAM`
    fn parse_env(&mut self, prefix: &str) -> Result<(), EnvError> {
        let base = prefix.replace('.', "_");
        let Some((user, password)) = std::env::var(format!("{base}_DSN"))
            .ok()
            .and_then(|dsn| dsn.split_once('@').map(|(u, p)| (u.to_string(), p.to_string())))
        else {
            return Err(EnvError::custom(IncompleteCredentials(prefix.to_string())));
        };
        self.user = user;
        self.password = password;
        Ok(())
    }
}

#[derive(Debug, Default, EnvStruct)]
#[env(prefix = "BILLING")]
struct Config {
    #[env("UPSTREAM")]
    pub upstream: Credentials,
    #[env("REGION,default=eu-west")]
    pub region: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("BILLING_UPSTREAM_DSN", "billing@hunter2");

    let config = Config::from_env()?;
    println!("Upstream user: {}", config.upstream.user);
    println!("Upstream password: {} chars", config.upstream.password.len());
    println!("Region: {}", config.region);

    // Errors from a custom parser come back unchanged
    std::env::remove_var("BILLING_UPSTREAM_DSN");
    match Config::from_env() {
        Err(e) => println!("Expected failure: {e}"),
        Ok(_) => println!("Unexpected success"),
    }

    Ok(())
}
