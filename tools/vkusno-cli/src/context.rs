//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use vkusno_commerce::catalog::Catalog;
use vkusno_commerce::config::StoreConfig;
use vkusno_commerce::state::StoreContext;
use vkusno_observability::{LogLevel, SessionId, StructuredLogger};

use crate::config;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// Where the configuration came from, if a file was used.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Session logger.
    pub logger: StructuredLogger,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config_path, config) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            let config = config::load(&path)?;
            (Some(path), config)
        } else {
            // Try to find config in current directory or parent directories
            match config::find(&cwd)? {
                Some((path, config)) => (Some(path), config),
                None => (None, StoreConfig::default()),
            }
        };

        let level = if output.is_verbose() {
            LogLevel::Debug
        } else {
            config.logging.level
        };
        let logger = StructuredLogger::new(SessionId::generate())
            .with_component("cli")
            .with_min_level(level)
            .with_format(config.logging.format);

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            logger,
        })
    }

    /// Start a storefront session with the loaded configuration.
    pub fn session(&self) -> StoreContext {
        StoreContext::new(Catalog::builtin(), self.config.clone(), self.logger.clone())
    }

    /// Path `config init` writes to.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join(config::CONFIG_NAMES[0])
    }
}
