//! Startup configuration read from the environment.

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::input::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::term::AssetSource;

pub const ASSET_DIR_VAR: &str = "LANDER_ASSET_DIR";
pub const KEY_RELEASE_MS_VAR: &str = "LANDER_KEY_RELEASE_MS";
pub const LOG_PATH_VAR: &str = "LANDER_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanderConfig {
    /// Directory holding the texture images; `None` uses the built-in palette.
    pub asset_dir: Option<PathBuf>,
    pub key_release_timeout_ms: u32,
    /// Log file. The terminal is owned by the game, so logs never go to stderr.
    pub log_path: Option<PathBuf>,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self {
            asset_dir: None,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            log_path: None,
        }
    }
}

impl LanderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset, blank or unparsable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
        };

        let key_release_timeout_ms = lookup(KEY_RELEASE_MS_VAR)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS);

        Self {
            asset_dir: path(ASSET_DIR_VAR),
            key_release_timeout_ms,
            log_path: path(LOG_PATH_VAR),
        }
    }

    pub fn asset_source(&self) -> AssetSource {
        match &self.asset_dir {
            Some(dir) => AssetSource::Directory(dir.clone()),
            None => AssetSource::Builtin,
        }
    }

    /// Route `log` output to the configured file, filtered by `RUST_LOG`
    /// (default `info`). Without a log path nothing is installed.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_path else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .format_timestamp_millis()
            .try_init()
            .context("logger already initialised")?;

        log::info!("logging to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = LanderConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, LanderConfig::default());
        assert_eq!(cfg.asset_source(), AssetSource::Builtin);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = LanderConfig::from_lookup(lookup(&[
            (ASSET_DIR_VAR, "/opt/lander/textures"),
            (KEY_RELEASE_MS_VAR, " 120 "),
            (LOG_PATH_VAR, "/tmp/lander.log"),
        ]));
        assert_eq!(
            cfg.asset_source(),
            AssetSource::Directory(PathBuf::from("/opt/lander/textures"))
        );
        assert_eq!(cfg.key_release_timeout_ms, 120);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/lander.log")));
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let cfg = LanderConfig::from_lookup(lookup(&[
            (ASSET_DIR_VAR, "   "),
            (KEY_RELEASE_MS_VAR, "soon"),
        ]));
        assert_eq!(cfg.asset_dir, None);
        assert_eq!(cfg.key_release_timeout_ms, DEFAULT_KEY_RELEASE_TIMEOUT_MS);
    }

    #[test]
    fn logging_without_path_is_a_no_op() {
        assert!(LanderConfig::default().init_logging().is_ok());
    }
}
