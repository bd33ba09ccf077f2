use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::VersionTemplate;
use crate::error::{AppcastError, Result};
use crate::feed::{ChannelMetadata, FeedSettings};

/// Environment variable holding the EdDSA signature for enclosures
pub const SIGNATURE_ENV: &str = "SPARKLE_SIGNATURE";
/// Environment variable holding the GitHub API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

const CONFIG_FILE_NAME: &str = "appcast.toml";

/// Represents the complete configuration for appcast-gen.
///
/// Describes where releases come from, how the channel is labelled, how download
/// URLs are formed and where the appcast is written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub channel: ChannelConfig,

    #[serde(default)]
    pub artifact: ArtifactConfig,

    #[serde(default)]
    pub signing: SigningConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// API token; only ever read from the environment
    #[serde(skip)]
    pub github_token: Option<String>,
}

fn default_slug() -> String {
    "klarity-app/updates".to_string()
}

fn default_download_base() -> String {
    "https://github.com".to_string()
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

/// Repository that publishes the releases and hosts their downloads.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_slug")]
    pub slug: String,

    #[serde(default = "default_download_base")]
    pub download_base: String,

    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            slug: default_slug(),
            download_base: default_download_base(),
            api_base: default_api_base(),
            per_page: default_per_page(),
        }
    }
}

fn default_channel_title() -> String {
    "Klarity App Updates".to_string()
}

fn default_channel_description() -> String {
    "Most recent updates to Klarity".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_site_link() -> String {
    "https://www.klarity.app".to_string()
}

fn default_item_title() -> String {
    "Version {version}".to_string()
}

/// Channel metadata and per-item labels.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChannelConfig {
    #[serde(default = "default_channel_title")]
    pub title: String,

    #[serde(default = "default_channel_description")]
    pub description: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// Site link used by the channel and every item
    #[serde(default = "default_site_link")]
    pub link: String,

    #[serde(default = "default_item_title")]
    pub item_title: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            title: default_channel_title(),
            description: default_channel_description(),
            language: default_language(),
            link: default_site_link(),
            item_title: default_item_title(),
        }
    }
}

fn default_file_pattern() -> String {
    "klarity-{version}-macos.zip".to_string()
}

/// Name of the downloadable file attached to each release.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactConfig {
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        ArtifactConfig {
            file_pattern: default_file_pattern(),
        }
    }
}

/// Signature copied verbatim into every enclosure.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SigningConfig {
    #[serde(default)]
    pub ed_signature: Option<String>,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("appcast.xml")
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: default_output_path(),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay `SPARKLE_SIGNATURE` and `GITHUB_TOKEN` when they are set and non-empty
    pub fn apply_env_overrides(&mut self) {
        if let Some(signature) = non_empty_env(SIGNATURE_ENV) {
            self.signing.ed_signature = Some(signature);
        }
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            self.github_token = Some(token);
        }
    }

    /// Check templates and the repository slug before any release is fetched
    pub fn validate(&self) -> Result<()> {
        let slug_parts: Vec<&str> = self.repository.slug.split('/').collect();
        if slug_parts.len() != 2 || slug_parts.iter().any(|part| part.trim().is_empty()) {
            return Err(AppcastError::config(format!(
                "Repository slug '{}' must have the form 'owner/name'",
                self.repository.slug
            )));
        }

        if self.repository.per_page == 0 || self.repository.per_page > 100 {
            return Err(AppcastError::config(format!(
                "per_page must be between 1 and 100, got {}",
                self.repository.per_page
            )));
        }

        VersionTemplate::new(self.channel.item_title.as_str()).validate()?;
        VersionTemplate::new(self.artifact.file_pattern.as_str()).validate()?;
        Ok(())
    }

    /// Settings consumed by the feed pipeline
    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            repository: self.repository.slug.clone(),
            download_base: self.repository.download_base.clone(),
            signature: self
                .signing
                .ed_signature
                .clone()
                .filter(|signature| !signature.is_empty()),
            item_title: VersionTemplate::new(self.channel.item_title.as_str()),
            artifact_file: VersionTemplate::new(self.artifact.file_pattern.as_str()),
            channel: ChannelMetadata {
                title: self.channel.title.clone(),
                description: self.channel.description.clone(),
                language: self.channel.language.clone(),
                link: self.channel.link.clone(),
            },
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `appcast.toml` in current directory
/// 3. `~/.config/.appcast.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides are applied on top of whichever source was used.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let mut config = match locate_config(config_path) {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|e| {
                AppcastError::config(format!("Cannot read {}: {}", path.display(), e))
            })?;
            Config::from_toml_str(&content)?
        }
        None => Config::default(),
    };

    config.apply_env_overrides();
    Ok(config)
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
[repository]
slug = "acme/rocket"

[channel]
title = "Rocket Updates"
"#,
        )
        .unwrap();

        assert_eq!(config.repository.slug, "acme/rocket");
        assert_eq!(config.repository.download_base, "https://github.com");
        assert_eq!(config.channel.title, "Rocket Updates");
        assert_eq!(config.channel.language, "en");
        assert_eq!(config.output.path, PathBuf::from("appcast.xml"));
    }

    #[test]
    fn test_validate_rejects_bad_slug() {
        let mut config = Config::default();
        config.repository.slug = "no-owner".to_string();
        assert!(matches!(config.validate(), Err(AppcastError::Config(_))));

        config.repository.slug = "owner/".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_template_without_placeholder() {
        let mut config = Config::default();
        config.artifact.file_pattern = "klarity-macos.zip".to_string();
        assert!(matches!(config.validate(), Err(AppcastError::Template(_))));
    }

    #[test]
    fn test_validate_rejects_per_page_out_of_range() {
        let mut config = Config::default();
        config.repository.per_page = 0;
        assert!(config.validate().is_err());
        config.repository.per_page = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_feed_settings_drop_empty_signature() {
        let mut config = Config::default();
        config.signing.ed_signature = Some(String::new());
        assert_eq!(config.feed_settings().signature, None);

        config.signing.ed_signature = Some("abc".to_string());
        assert_eq!(config.feed_settings().signature.as_deref(), Some("abc"));
    }

    #[test]
    fn test_feed_settings_channel() {
        let settings = Config::default().feed_settings();
        assert_eq!(settings.repository, "klarity-app/updates");
        assert_eq!(settings.channel.link, "https://www.klarity.app");
        assert_eq!(settings.channel.description, "Most recent updates to Klarity");
        assert_eq!(settings.item_title.format("1.0.0"), "Version 1.0.0");
    }

    #[test]
    fn test_malformed_toml() {
        let result = Config::from_toml_str("[repository\nslug = 1");
        assert!(matches!(result, Err(AppcastError::Toml(_))));
    }
}
