use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use qpmc_models::email_address::EmailAddressWithName;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration from the paths in the `QPMC_CONFIG` environment
/// variable (colon-separated, later files override earlier ones), falling
/// back to the repository `config.toml`.
pub fn load() -> anyhow::Result<Config> {
    match std::env::var("QPMC_CONFIG") {
        Ok(paths) => load_paths(&paths.split(':').collect::<Vec<_>>()),
        Err(std::env::VarError::NotPresent) => load_paths(&[DEFAULT_CONFIG_PATH]),
        Err(err) => Err(err).context("Failed to read the QPMC_CONFIG environment variable"),
    }
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub cors: CorsConfig,
    pub email: EmailConfig,
    pub contact: ContactConfig,
    pub careers: CareersConfig,
    pub motahida: MotahidaConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// SMTP transport settings of one brand. The url carries host, port,
/// credentials, and the security mode (`smtp://` or `smtps://`).
#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct CareersConfig {
    pub recipient: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct MotahidaConfig {
    pub email: EmailConfig,
    pub contact: MotahidaContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct MotahidaContactConfig {
    /// Comma-separated destination list. Kept raw here so the recipient set
    /// is resolved on every submission rather than once at startup.
    pub recipients: String,
}
