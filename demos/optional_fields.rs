//! Example demonstrating Option<T> for optional fields

use envtag::{Snapshot, Unmarshal};

#[derive(Debug, Default, Unmarshal)]
struct Config {
    #[env("APP_NAME")]
    pub app_name: String,

    // None if not set, Some("") if set to an empty string
    #[env("API_KEY")]
    pub api_key: Option<String>,

    #[env("PORT")]
    pub port: Option<i32>,

    #[env("DEBUG")]
    pub debug: Option<bool>,

    // Outer None: unset. Some(None) never occurs: a set variable fills every level
    #[env("PROXY")]
    pub proxy: Option<Option<String>>,
}

fn main() -> anyhow::Result<()> {
    // Set only some variables
    let env = Snapshot::from_environ(["APP_NAME=my-application", "PORT=8080", "API_KEY="]);

    let config = Config::from_snapshot(env)?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  API Key: {:?}", config.api_key); // Some("")
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  Debug: {:?}", config.debug); // None
    println!("  Proxy: {:?}", config.proxy); // None

    Ok(())
}
