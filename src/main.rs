use config::{Config, Environment, File};

use prenota::models::config::ServerConfig;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    Config::builder()
        .set_default("address", "127.0.0.1")?
        .set_default("port", 8000_i64)?
        .set_default("database_url", "prenota.db")?
        .set_default("assets_dir", "./assets")?
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = load_config()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    prenota::run(server_config).await
}
