use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use crate::config::Config;
use crate::domain::RawRelease;
use crate::error::Result;
use crate::source::ReleaseSource;

const USER_AGENT: &str = concat!("appcast-gen/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Lists releases through the GitHub REST API (single page, newest releases first)
pub struct GitHubReleaseSource {
    client: Client,
    api_base: String,
    slug: String,
    per_page: u32,
    token: Option<String>,
}

impl GitHubReleaseSource {
    pub fn new(
        api_base: impl Into<String>,
        slug: impl Into<String>,
        per_page: u32,
        token: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(GitHubReleaseSource {
            client,
            api_base: api_base.into(),
            slug: slug.into(),
            per_page,
            token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.repository.api_base.as_str(),
            config.repository.slug.as_str(),
            config.repository.per_page,
            config.github_token.clone(),
        )
    }

    /// `<api_base>/repos/<slug>/releases?per_page=<n>`
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/releases?per_page={}",
            self.api_base.trim_end_matches('/'),
            self.slug,
            self.per_page
        )
    }
}

impl ReleaseSource for GitHubReleaseSource {
    fn fetch_releases(&self) -> Result<Vec<RawRelease>> {
        let mut request = self.client.get(self.releases_url()).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {}", token));
        }

        let releases = request.send()?.error_for_status()?.json::<Vec<RawRelease>>()?;
        Ok(releases)
    }

    fn describe(&self) -> String {
        format!("GitHub releases of {}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_url() {
        let source =
            GitHubReleaseSource::new("https://api.github.com/", "klarity-app/updates", 100, None)
                .unwrap();
        assert_eq!(
            source.releases_url(),
            "https://api.github.com/repos/klarity-app/updates/releases?per_page=100"
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.repository.slug = "acme/rocket".to_string();
        config.repository.per_page = 30;
        config.github_token = Some("secret".to_string());

        let source = GitHubReleaseSource::from_config(&config).unwrap();
        assert_eq!(
            source.releases_url(),
            "https://api.github.com/repos/acme/rocket/releases?per_page=30"
        );
        assert_eq!(source.token.as_deref(), Some("secret"));
        assert_eq!(source.describe(), "GitHub releases of acme/rocket");
    }
}
