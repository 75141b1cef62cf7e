//! Configuration management for Vellum.
//!
//! Parses `vellum.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.url`
//! - `content.space`
//! - `content.access_token`
//! - `content.host`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the output directory.
    pub out_dir: Option<PathBuf>,
    /// Override the site title.
    pub site_title: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "vellum.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteConfig,
    /// Content delivery API credentials.
    /// When present, `space` and `access_token` are required.
    pub content: Option<ContentConfig>,
    /// Link enrichment options.
    pub enrich: EnrichConfig,
    /// Build output options.
    pub build: BuildConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            content: None,
            enrich: EnrichConfig::default(),
            build: BuildConfig::default(),
            config_path: None,
        }
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public site URL.
    pub url: String,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            title: "My Blog".to_owned(),
            description: String::new(),
        }
    }
}

/// Content delivery API configuration.
#[derive(Debug, Deserialize)]
pub struct ContentConfig {
    /// Space id.
    pub space: String,
    /// Delivery API access token.
    pub access_token: String,
    /// Environment name.
    #[serde(default = "default_environment")]
    pub environment: String,
    /// Delivery API host.
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_environment() -> String {
    "master".to_owned()
}

fn default_host() -> String {
    "cdn.contentful.com".to_owned()
}

impl ContentConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.space, "content.space")?;
        require_non_empty(&self.access_token, "content.access_token")?;
        require_non_empty(&self.environment, "content.environment")?;
        require_non_empty(&self.host, "content.host")?;
        Ok(())
    }
}

/// Link enrichment configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Number of URLs fetched in parallel.
    pub concurrency: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Number of articles on the latest-articles page.
    pub new_articles_limit: u32,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            concurrency: 8,
            timeout_secs: 10,
            new_articles_limit: 10,
        }
    }
}

/// Build output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory for generated pages.
    pub out_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("public"),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`content.access_token`").
        field: String,
        /// Error message (e.g., "${`CMS_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `vellum.toml` in current directory and
    /// parents, falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(out_dir) = &settings.out_dir {
            self.build.out_dir.clone_from(out_dir);
        }
        if let Some(title) = &settings.site_title {
            self.site.title.clone_from(title);
        }
    }

    /// Get validated content configuration.
    ///
    /// Returns the content config if the `[content]` section is present
    /// and all fields are valid. Use this instead of accessing the
    /// `content` field directly when the command requires the CMS.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_content(&self) -> Result<&ContentConfig, ConfigError> {
        let content = self
            .content
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("[content] section required in config".into()))?;
        content.validate()?;
        Ok(content)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        // A relative out_dir is anchored at the config file's directory.
        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.build.out_dir = config_dir.join(&config.build.out_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        if self.enrich.concurrency == 0 {
            return Err(ConfigError::Validation(
                "enrich.concurrency must be greater than 0".to_owned(),
            ));
        }
        if self.enrich.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "enrich.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        if self.enrich.new_articles_limit == 0 {
            return Err(ConfigError::Validation(
                "enrich.new_articles_limit must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.url = expand::expand_env(&self.site.url, "site.url")?;

        if let Some(ref mut content) = self.content {
            content.space = expand::expand_env(&content.space, "content.space")?;
            content.access_token =
                expand::expand_env(&content.access_token, "content.access_token")?;
            content.host = expand::expand_env(&content.host, "content.host")?;
        }

        Ok(())
    }
}
