use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the integration token.
pub const TOKEN_ENV: &str = "NOTION_TOKEN";
/// Environment variable holding the parent page id or URL.
pub const PAGE_ID_ENV: &str = "NOTION_PAGE_ID";

pub const TOKEN_PLACEHOLDER: &str = "ntn_YOUR_TOKEN_HERE";
pub const PAGE_ID_PLACEHOLDER: &str = "YOUR_ROOT_PAGE_ID_HERE";

/// The block API accepts at most this many children per append call.
pub const MAX_BATCH_SIZE: usize = 100;
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

const TEMPLATE: &str = r#"# notion-pusher configuration
notion_token = "ntn_YOUR_TOKEN_HERE"
root_page_id = "YOUR_ROOT_PAGE_ID_HERE"

[push]
batch_size = 100
notion_version = "2022-06-28"
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("No {0} configured; run `np --init-config` to create a config file")]
    MissingCredential(&'static str),

    #[error("The configured {0} is still the template placeholder")]
    PlaceholderCredential(&'static str),
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub notion_token: Option<String>,
    pub root_page_id: Option<String>,
    #[serde(default)]
    pub push: PushSettings,
}

/// Tuning for the block upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushSettings {
    pub batch_size: usize,
    pub notion_version: String,
}

impl Default for PushSettings {
    fn default() -> Self {
        Self {
            batch_size: MAX_BATCH_SIZE,
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
        }
    }
}

impl PushSettings {
    /// Batch size clamped to what the API accepts.
    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.clamp(1, MAX_BATCH_SIZE)
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Writes a commented template with placeholder credentials.
    ///
    /// An existing file is left untouched; returns whether a file was written.
    pub fn write_template<P: AsRef<Path>>(config_path: P) -> anyhow::Result<bool> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            return Ok(false);
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, TEMPLATE)?;
        Ok(true)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/notion-pusher");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS` in a user-supplied config path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub token: Option<String>,
    pub page_id: Option<String>,
}

/// The token and parent page a push runs with.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    /// Page id or URL as supplied; parsing happens in the client.
    pub root_page_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("root_page_id", &self.root_page_id)
            .finish()
    }
}

impl Credentials {
    /// Resolves each credential from the first source that has it: command
    /// line, then environment, then config file. Blank values count as absent.
    pub fn resolve<F>(
        overrides: &Overrides,
        env: F,
        file: Option<&Config>,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = pick(
            "notion_token",
            [
                overrides.token.clone(),
                env(TOKEN_ENV),
                file.and_then(|c| c.notion_token.clone()),
            ],
            TOKEN_PLACEHOLDER,
        )?;
        let root_page_id = pick(
            "root_page_id",
            [
                overrides.page_id.clone(),
                env(PAGE_ID_ENV),
                file.and_then(|c| c.root_page_id.clone()),
            ],
            PAGE_ID_PLACEHOLDER,
        )?;
        Ok(Self {
            token,
            root_page_id,
        })
    }

    /// [`Credentials::resolve`] against the process environment.
    pub fn resolve_from_env(
        overrides: &Overrides,
        file: Option<&Config>,
    ) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |name| std::env::var(name).ok(), file)
    }
}

fn pick(
    name: &'static str,
    sources: [Option<String>; 3],
    placeholder: &str,
) -> Result<String, ConfigError> {
    let value = sources
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
        .ok_or(ConfigError::MissingCredential(name))?;
    if value == placeholder {
        return Err(ConfigError::PlaceholderCredential(name));
    }
    Ok(value)
}
