use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Absolute base used when building share URLs (no trailing slash).
    pub public_base_url: String,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Single shared admin capability token.
    pub admin_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    /// Text provider: "anthropic" or "openai". Explicit selection, not
    /// credential sniffing.
    pub provider: String,
    pub anthropic_api_key: String,
    pub openai_api_key: String,
    pub text_model: String,
    pub image_model: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// "filesystem" or "s3".
    pub backend: String,
    /// Filesystem backend: directory badge assets are written under.
    pub root_dir: String,
    /// Public base path/URL the assets are served from.
    pub public_base: String,
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_endpoint: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub ai: AiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.public_base_url", "http://127.0.0.1:3000")?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600)?
            .set_default("auth.admin_key", "")?
            .set_default("ai.provider", "openai")?
            .set_default("ai.anthropic_api_key", "")?
            .set_default("ai.openai_api_key", "")?
            .set_default("ai.text_model", "")?
            .set_default("ai.image_model", "dall-e-3")?
            .set_default("storage.backend", "filesystem")?
            .set_default("storage.root_dir", "./public")?
            .set_default("storage.public_base", "")?
            .set_default("storage.s3_bucket", "")?
            .set_default("storage.s3_region", "")?
            .set_default("storage.s3_endpoint", "")?
            .set_default("storage.s3_access_key", "")?
            .set_default("storage.s3_secret_key", "")?
            // Load from config/config.toml
            .add_source(File::with_name("config/config").required(false))
            // Override from environment (e.g., BADGERY__AUTH__ADMIN_KEY)
            .add_source(Environment::with_prefix("BADGERY").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
