use keywordscout_core::{ConfigError, CoreError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Google Ads credential bundle, sourced from the `[google_ads]` table of the
/// secret store and consumed verbatim by client construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAdsConfig {
    pub developer_token: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub login_customer_id: String,
    #[serde(default = "default_use_proto_plus")]
    pub use_proto_plus: bool,
}

fn default_use_proto_plus() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    google_ads: GoogleAdsConfig,
}

/// Key-value secret store backed by a TOML file. Read once per "Generate"
/// action; nothing is cached across actions.
#[derive(Debug)]
pub struct SecretStore {
    google_ads: GoogleAdsConfig,
}

impl SecretStore {
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = fs::read_to_string(path).map_err(|_| {
            CoreError::Config(ConfigError::FileNotFound {
                path: path.display().to_string(),
            })
        })?;
        let parsed: SecretsFile =
            toml::from_str(&raw).map_err(|e| CoreError::Config(ConfigError::Parse(e)))?;
        debug!("Loaded secret store from {}", path.display());
        Ok(Self {
            google_ads: parsed.google_ads,
        })
    }

    pub fn google_ads(&self) -> &GoogleAdsConfig {
        &self.google_ads
    }
}

/// Credentials written to a scoped temporary YAML file. The file lives for
/// exactly one client construction and is removed when this value drops,
/// on success and failure paths alike.
#[derive(Debug)]
pub struct MaterializedCredentials {
    file: NamedTempFile,
}

impl MaterializedCredentials {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl GoogleAdsConfig {
    /// Write the bundle to a temporary credentials file in the format
    /// `GoogleAdsClient::from_storage` reads back.
    pub fn materialize(&self) -> Result<MaterializedCredentials, CoreError> {
        let file = tempfile::Builder::new()
            .prefix("google-ads-")
            .suffix(".yaml")
            .tempfile()?;
        serde_yaml::to_writer(file.as_file(), self)
            .map_err(|e| CoreError::Config(ConfigError::CredentialFile(e)))?;
        debug!("Materialized credentials at {}", file.path().display());
        Ok(MaterializedCredentials { file })
    }

    /// Read a credentials file previously produced by `materialize`.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CoreError> {
        let raw = fs::read_to_string(path).map_err(|_| {
            CoreError::Config(ConfigError::FileNotFound {
                path: path.display().to_string(),
            })
        })?;
        let config: Self = serde_yaml::from_str(&raw)
            .map_err(|e| CoreError::Config(ConfigError::CredentialFile(e)))?;
        Ok(config)
    }
}
