use std::{env, fmt::Display, fs::read_to_string, str::FromStr};

use tracing::{info, warn};

/// The two secrets gating all persistent-store access. Absence of either
/// degrades the resolver to seed/generation-only mode instead of failing.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: Option<StoreConfig>,
    pub generation: Option<GenerationConfig>,
}

impl Config {
    pub fn load() -> Self {
        let store = match (read_secret("GLOSSARIO_STORE_URL"), read_secret("GLOSSARIO_STORE_KEY")) {
            (Some(url), Some(key)) => Some(StoreConfig {
                url: url.trim_end_matches('/').to_string(),
                key,
            }),
            _ => {
                warn!("Store secrets missing, persistence disabled");
                None
            }
        };

        let generation = read_secret("GLOSSARIO_AI_KEY").map(|api_key| GenerationConfig {
            api_key,
            model: try_load("GLOSSARIO_AI_MODEL", "gemini-2.0-flash"),
        });

        if generation.is_none() {
            warn!("GLOSSARIO_AI_KEY missing, generation tier disabled");
        }

        Self {
            port: try_load("RUST_PORT", "1111"),
            store,
            generation,
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

/// Environment variable first, then the Docker-style `/run/secrets` file.
fn read_secret(secret_name: &str) -> Option<String> {
    if let Ok(value) = var(secret_name) {
        return Some(value.trim().to_string()).filter(|s| !s.is_empty());
    }

    read_to_string(format!("/run/secrets/{secret_name}"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
