use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use featgen_util::errors::FeatgenError;

/// Name of the configuration file looked up by [`GlobalConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "featgen.toml";

/// Configuration threaded into every resolution entry point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub platform: PlatformConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Platform checkout settings from `[platform]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    #[serde(default = "default_checkout")]
    pub checkout: PathBuf,
    #[serde(default = "default_visibility_dir", rename = "visibility-dir")]
    pub visibility_dir: PathBuf,
    #[serde(default = "default_feature_group", rename = "feature-group")]
    pub feature_group: String,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            checkout: default_checkout(),
            visibility_dir: default_visibility_dir(),
            feature_group: default_feature_group(),
        }
    }
}

impl PlatformConfig {
    /// Absolute-or-relative path of the feature visibility directory.
    pub fn visibility_path(&self) -> PathBuf {
        self.checkout.join(&self.visibility_dir)
    }
}

fn default_checkout() -> PathBuf {
    PathBuf::from("../open-liberty")
}

fn default_visibility_dir() -> PathBuf {
    PathBuf::from("dev/com.ibm.websphere.appserver.features/visibility")
}

fn default_feature_group() -> String {
    crate::DEFAULT_FEATURE_GROUP.to_string()
}

/// Resolution settings from `[resolve]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default = "default_jobs")]
    pub jobs: u32,
    #[serde(default)]
    pub unversioned: UnversionedPolicy,
    #[serde(default, rename = "package-names")]
    pub package_names: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            unversioned: UnversionedPolicy::default(),
            package_names: false,
        }
    }
}

fn default_jobs() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(4)
}

/// What version aggregation does with feature identifiers that carry no
/// numeric version suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnversionedPolicy {
    /// Discard them from the aggregated tally.
    #[default]
    Drop,
    /// Keep them under their own identifier.
    PassThrough,
}

impl GlobalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            FeatgenError::Config {
                message: format!("Failed to parse configuration: {e}"),
            }
            .into()
        })
    }

    /// Load the configuration at `path`, or return defaults if the file doesn't exist.
    pub fn load(path: &Path) -> miette::Result<Self> {
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|e| FeatgenError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load `featgen.toml` from `dir`, falling back to defaults.
    pub fn discover(dir: &Path) -> miette::Result<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }
}
