//! Configuration file support.
//!
//! Settings live in the `renderer` section of `config.json`, the same file
//! the extraction tools read their API keys from. Other sections are
//! ignored. CLI flags override config file values.
//!
//! ```json
//! {
//!   "renderer": {
//!     "site_name": "Maruyama",
//!     "data_source": "https://shop.example.com/products.json",
//!     "skeleton": "templates/product.html",
//!     "output": "rendered_product.html",
//!     "description_mode": "text",
//!     "selectors": { "feature_panel": ".collapsible-content:nth-of-type(2)" }
//!   }
//! }
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::page::Selectors;
use crate::render::{DescriptionMode, RenderOptions};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    renderer: Config,
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Appended to the product name in the page title.
    pub site_name: String,
    /// URL or path of the products document.
    pub data_source: String,
    /// Page skeleton to render into; the bundled one when unset.
    pub skeleton: Option<PathBuf>,
    /// Where rendered HTML is written; stdout when unset.
    pub output: Option<PathBuf>,
    pub description_mode: DescriptionMode,
    pub selectors: Selectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: RenderOptions::default().site_name,
            data_source: "products.json".into(),
            skeleton: None,
            output: None,
            description_mode: DescriptionMode::default(),
            selectors: Selectors::default(),
        }
    }
}

impl Config {
    /// Loads the config at `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("no config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        let config = Self::parse(&contents).map_err(|err| Error::Config {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;
        info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    fn parse(contents: &str) -> serde_json::Result<Self> {
        let file: ConfigFile = serde_json::from_str(contents)?;
        Ok(file.renderer)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            site_name: self.site_name.clone(),
            description_mode: self.description_mode,
        }
    }
}
