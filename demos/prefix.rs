//! Example demonstrating a struct-level key prefix

use envtag::Unmarshal;

#[derive(Debug, Default, Unmarshal)]
#[env(prefix = "MYAPP_")]
struct Config {
    // Loaded from MYAPP_DATABASE_URL
    #[env("DATABASE_URL")]
    pub database_url: String,

    // Loaded from MYAPP_PORT
    #[env("PORT,default=8080")]
    pub port: i64,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/mydb");

    let config = Config::from_env()?;

    println!("Database URL: {}", config.database_url);
    println!("Port: {}", config.port);

    Ok(())
}
