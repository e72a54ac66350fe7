//! Basic usage example

use envtag::Unmarshal;
use std::time::Duration;

#[derive(Debug, Default, Unmarshal)]
struct Config {
    // Loaded from DATABASE_URL
    #[env("DATABASE_URL")]
    pub database_url: String,

    // Numeric type
    #[env("MAX_CONNECTIONS")]
    pub max_connections: i32,

    // Boolean type
    #[env("DEBUG_MODE")]
    pub debug_mode: bool,

    // Duration literal, e.g. 30s or 1m30s
    #[env("REQUEST_TIMEOUT")]
    pub request_timeout: Duration,

    // No tag: never read from the environment
    pub build_id: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MAX_CONNECTIONS", "20");
    std::env::set_var("DEBUG_MODE", "true");
    std::env::set_var("REQUEST_TIMEOUT", "1m30s");

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Request Timeout: {:?}", config.request_timeout);
    println!("  Build ID: {:?}", config.build_id); // ""

    Ok(())
}
