//! Example demonstrating default literals in tags

use envtag::{Snapshot, Unmarshal};
use std::time::Duration;

#[derive(Debug, Default, Unmarshal)]
struct Config {
    #[env("SERVER_ADDR,default=127.0.0.1:8080")]
    pub server_addr: String,

    // Everything after `default=` is the literal, `=` included
    #[env("DSN_OPTIONS,default=sslmode=disable")]
    pub dsn_options: String,

    #[env("WORKERS,default=4")]
    pub workers: i64,

    #[env("SHUTDOWN_GRACE,default=10s")]
    pub shutdown_grace: Duration,

    // Only LOG_LEVEL is looked up; LEGACY_LOG_LEVEL is recorded but unused
    #[env("LOG_LEVEL,LEGACY_LOG_LEVEL,default=info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    // An injected snapshot instead of the process environment
    let env = Snapshot::from_environ(["WORKERS=16", "LEGACY_LOG_LEVEL=debug"]);

    let config = Config::from_snapshot(env)?;

    println!("Configuration:");
    println!("  Server Address: {}", config.server_addr); // 127.0.0.1:8080
    println!("  DSN Options: {}", config.dsn_options); // sslmode=disable
    println!("  Workers: {}", config.workers); // 16
    println!("  Shutdown Grace: {:?}", config.shutdown_grace); // 10s
    println!("  Log Level: {}", config.log_level); // info

    Ok(())
}
