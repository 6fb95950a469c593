//! Application configuration
//!
//! Settings are fixed at build time: `PINEAPPL_AUTH_URL` points the wizard at
//! the auth API and `PINEAPPL_REFERENCE_URL`, when set, replaces the bundled
//! faculty table with a remote lookup service.

use anyhow::{bail, Context};
use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_URL: &str = "http://localhost:8000/auth/v1";
pub const DEFAULT_AVATAR_BASE_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub reference_data: ReferenceDataConfig,
    pub auth: AuthConfig,
    pub avatar: AvatarConfig,
}

/// Where faculty and department lists come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReferenceDataConfig {
    /// Bundled table, no network access
    #[default]
    Static,
    /// Remote lookup service rooted at `base_url`
    Remote { base_url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Path the avatar images are served under
    pub base_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_AUTH_URL.to_string(),
        }
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_AVATAR_BASE_PATH.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reference_data: ReferenceDataConfig::default(),
            auth: AuthConfig::default(),
            avatar: AvatarConfig::default(),
        }
    }
}

impl AppConfig {
    /// Configuration baked in from the build environment
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PINEAPPL_AUTH_URL"),
            option_env!("PINEAPPL_REFERENCE_URL"),
        )
    }

    pub fn from_values(auth_url: Option<&str>, reference_url: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = auth_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.auth.base_url = url.to_string();
        }
        if let Some(url) = reference_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.reference_data = ReferenceDataConfig::Remote {
                base_url: url.to_string(),
            };
        }

        config
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        check_http_url(&self.auth.base_url).context("auth.base_url")?;

        if let ReferenceDataConfig::Remote { base_url } = &self.reference_data {
            check_http_url(base_url).context("reference_data.base_url")?;
        }

        if !self.avatar.base_path.starts_with('/') {
            bail!(
                "avatar.base_path must be an absolute path, got {:?}",
                self.avatar.base_path
            );
        }

        Ok(())
    }
}

fn check_http_url(value: &str) -> anyhow::Result<()> {
    let url = Url::parse(value).with_context(|| format!("{:?} is not a valid URL", value))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("unsupported URL scheme {:?}", other),
    }
}
