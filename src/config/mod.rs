use std::path::{Path, PathBuf};

use chrono::Duration;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use jsonwebtoken::{DecodingKey, EncodingKey};
use log::{debug, info};
use serde::{Deserialize, Deserializer};

use crate::auth::token::{TokenIssuer, TokenVerifier};

const ENV_PREFIX: &str = "UPTASK_SERVER_";

#[derive(Deserialize, Clone)]
pub struct Config {
    /// the address the server should bind to
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// The uri to the postgres database
    pub database_url: String,
    /// The shared secret used to sign and verify tokens
    #[serde(rename = "secret", deserialize_with = "deserialize_jwt_secret")]
    pub jwt_secret: (EncodingKey, DecodingKey),
    /// How long a token issued by ``autenticarUsuario`` is valid
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_token_ttl_hours() -> i64 {
    4
}

impl Config {
    /// Load the configuration
    ///
    /// The default path is a file called `config.toml` in $PWD/config.toml.
    /// The file is optional, every option can be set with an environment
    /// variable prefixed with `UPTASK_SERVER_` instead.
    pub fn load() -> anyhow::Result<Self> {
        // either read the path for the config from the env UPTASK_SERVER_CONFIG
        // or use the default path relative to the working directory
        let path: PathBuf = match std::env::var(format!("{}CONFIG", ENV_PREFIX)) {
            Ok(path) => path.into(),
            Err(e) => {
                debug!("Cannot read env var for config path: {}", e);
                std::env::current_dir()?.join("config.toml")
            }
        };

        info!("Reading config from {}", path.display());
        Ok(Self::figment(&path).extract()?)
    }

    /// The config file at ``path`` overwritten by the environment
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn token_issuer(&self) -> TokenIssuer {
        TokenIssuer::new(
            self.jwt_secret.0.clone(),
            Duration::hours(self.token_ttl_hours),
        )
    }

    pub fn token_verifier(&self) -> TokenVerifier {
        TokenVerifier::new(self.jwt_secret.1.clone())
    }
}

fn deserialize_jwt_secret<'de, D>(secret: D) -> Result<(EncodingKey, DecodingKey), D::Error>
where
    D: Deserializer<'de>,
{
    let secret = String::deserialize(secret)?;
    if secret.is_empty() {
        return Err(<D::Error as serde::de::Error>::custom("secret must not be empty"));
    }
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    Ok((encoding_key, decoding_key))
}
