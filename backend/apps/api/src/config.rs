//! Process Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Lookups go through a closure so the parsing rules can be tested without
//! touching the process environment.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::{DEFAULT_ACCESS_TOKEN_TTL, DEFAULT_REFRESH_TOKEN_TTL};
use forum::ForumConfig;
use platform::crypto::decode_secret;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
/// Upper bound for token ages (one year)
const MAX_TOKEN_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Listener and CORS settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub frontend_origins: Vec<String>,
}

pub fn server_config(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<ServerConfig> {
    let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match var("PORT") {
        Some(raw) => raw.trim().parse::<u16>().context("PORT must be a port number")?,
        None => DEFAULT_PORT,
    };
    let addr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("HOST/PORT do not form a socket address: {host}:{port}"))?;

    let frontend_origins = var("FRONTEND_ORIGINS")
        .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    Ok(ServerConfig {
        addr,
        frontend_origins,
    })
}

/// Token secrets, lifetimes and password pepper (raw bytes of `PASSWORD_PEPPER`)
///
/// Debug builds without `ACCESS_TOKEN_KEY` / `REFRESH_TOKEN_KEY` get random
/// secrets (tokens then die with the process). Release builds require both.
pub fn auth_config(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<AuthConfig> {
    let keys = (var("ACCESS_TOKEN_KEY"), var("REFRESH_TOKEN_KEY"));
    let config = match keys {
        (Some(access), Some(refresh)) => AuthConfig::new(
            decode_secret(&access).context("ACCESS_TOKEN_KEY")?,
            decode_secret(&refresh).context("REFRESH_TOKEN_KEY")?,
        ),
        _ if cfg!(debug_assertions) => {
            tracing::warn!("Token keys not configured, using random secrets");
            AuthConfig::with_random_secrets()
        }
        _ => bail!("ACCESS_TOKEN_KEY and REFRESH_TOKEN_KEY must be set in production"),
    };

    let access_ttl = seconds(&var, "ACCESS_TOKEN_AGE")?.unwrap_or(DEFAULT_ACCESS_TOKEN_TTL);
    let refresh_ttl = seconds(&var, "REFRESH_TOKEN_AGE")?.unwrap_or(DEFAULT_REFRESH_TOKEN_TTL);

    let pepper = var("PASSWORD_PEPPER")
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(config
        .with_ttls(access_ttl, refresh_ttl)
        .with_pepper(pepper))
}

pub fn forum_config(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<ForumConfig> {
    let config = ForumConfig::default();
    match var("REPLY_FETCH_CONCURRENCY") {
        Some(raw) => {
            let limit = raw
                .trim()
                .parse::<usize>()
                .context("REPLY_FETCH_CONCURRENCY must be a positive integer")?;
            Ok(config.with_reply_fetch_concurrency(limit))
        }
        None => Ok(config),
    }
}

fn seconds(
    var: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> anyhow::Result<Option<Duration>> {
    let Some(raw) = var(name) else {
        return Ok(None);
    };
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{name} must be a number of seconds"))?;
    if secs > MAX_TOKEN_AGE_SECS {
        bail!("{name} must not exceed {MAX_TOKEN_AGE_SECS} seconds");
    }
    Ok(Some(Duration::from_secs(secs)))
}
