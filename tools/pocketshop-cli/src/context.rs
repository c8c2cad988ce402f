//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pocketshop_commerce::search::CatalogBrowser;
use pocketshop_data::{load_catalog, CatalogSource, FileCatalogSource, HttpCatalogSource};
use pocketshop_observability::{SessionId, StructuredLogger};

use crate::config::{ShopConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Session logger.
    pub logger: StructuredLogger,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, fixture: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (mut config, config_path) = if let Some(path) = config_path {
            (ShopConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        if let Some(fixture) = fixture {
            config.catalog.fixture = Some(fixture.to_string());
        }

        let level = if output.is_verbose() {
            pocketshop_observability::LogLevel::Debug
        } else {
            config.logging.level
        };
        let logger = StructuredLogger::new(SessionId::generate())
            .with_min_level(level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(ShopConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The configured product source.
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.config.catalog.fixture {
            Some(path) => Box::new(FileCatalogSource::new(self.resolve_path(path))),
            None => Box::new(HttpCatalogSource::from_base_url(&self.config.api.base_url)),
        }
    }

    /// A catalog screen sized from config, with its catalog fetched.
    ///
    /// A failed fetch is logged and leaves the screen in its failed state;
    /// callers decide whether that ends the command.
    pub async fn open_catalog(&self) -> CatalogBrowser {
        let mut browser = CatalogBrowser::with_page_size(self.config.catalog.page_size);
        let source = self.catalog_source();
        let logger = self.logger.for_screen("ProductList");

        let spinner = self.output.spinner("Loading products...");
        let loaded = load_catalog(source.as_ref(), &mut browser, &logger).await;
        spinner.finish_and_clear();

        if let Err(e) = loaded {
            self.output.debug(&format!("Fetch from {} failed: {}", source.describe(), e));
        }

        browser
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
