//! Example demonstrating nested records and error dispatch

use envtag::{unmarshal_from, ErrorKind, Snapshot, Unmarshal};

#[derive(Debug, Default, Unmarshal)]
struct Database {
    #[env("DB_HOST,default=localhost")]
    pub host: String,

    #[env("DB_PORT,default=5432")]
    pub port: i32,
}

#[derive(Debug, Default, Unmarshal)]
struct Cache {
    #[env("CACHE_URL")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Unmarshal)]
struct Config {
    // Nested records are walked without a tag
    pub database: Database,
    pub cache: Cache,

    #[env("SERVICE_NAME")]
    pub service_name: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("envtag=debug"))
        .init();

    let env = Snapshot::from_environ(["DB_HOST=db.internal", "SERVICE_NAME=billing"]);
    let config = Config::from_snapshot(env)?;
    println!("{config:#?}");

    // The first failure stops the walk; earlier fields keep their values
    let mut partial = Config::default();
    let env = Snapshot::from_environ(["DB_HOST=db.internal", "DB_PORT=not-a-port"]);
    match unmarshal_from(env, &mut partial) {
        Ok(()) => println!("unexpected success"),
        Err(e) if e.kind() == ErrorKind::Coercion => {
            println!("Rejected: {e}");
            println!("  Host already set: {}", partial.database.host);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
