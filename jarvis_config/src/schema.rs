use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "Config::default_data_file")]
    pub data_file: String,
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub features: FeaturesConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file(),
            assistant: AssistantConfig::default(),
            features: FeaturesConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "AssistantConfig::default_name")]
    pub name: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
        }
    }
}

impl AssistantConfig {
    fn default_name() -> String {
        "Jarvis".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FeaturesConfig {
    #[serde(default = "default_true")]
    pub web_search: bool,
    #[serde(default = "default_true")]
    pub builtin_commands: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            web_search: true,
            builtin_commands: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "SearchConfig::default_engine_url")]
    pub engine_url: String,
    #[serde(default = "SearchConfig::default_query_param")]
    pub query_param: String,
    #[serde(default = "default_true")]
    pub open_browser: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            engine_url: Self::default_engine_url(),
            query_param: Self::default_query_param(),
            open_browser: true,
        }
    }
}

impl SearchConfig {
    fn default_engine_url() -> String {
        "https://www.google.com/search".to_string()
    }

    fn default_query_param() -> String {
        "q".to_string()
    }
}

const fn default_true() -> bool {
    true
}

const CONFIG_TEMPLATE: &str = r#"{
  "data_file": "jarvis_data.json",
  "assistant": {
    "name": "Jarvis"
  },
  "features": {
    "web_search": true,
    "builtin_commands": true
  },
  "search": {
    "engine_url": "https://www.google.com/search",
    "query_param": "q",
    "open_browser": true
  }
}
"#;

impl Config {
    fn default_data_file() -> String {
        "jarvis_data.json".to_string()
    }

    /// `~/jarvis`
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("jarvis"))
    }

    /// `~/jarvis/config.json`
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    /// Fields absent from the file keep their default values.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !config_path.exists() {
            warn!(
                "Config file not found at: {}. Using defaults; run 'jarvis init' to create one.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Resolve `data_file`: absolute paths as-is, relative paths against
    /// `config_dir` when the file exists there, otherwise against the CWD.
    #[must_use]
    pub fn data_path(&self, config_dir: Option<&Path>) -> PathBuf {
        let data_file = PathBuf::from(&self.data_file);
        if data_file.is_absolute() {
            return data_file;
        }

        config_dir
            .map(|dir| dir.join(&data_file))
            .filter(|candidate| candidate.exists())
            .unwrap_or(data_file)
    }

    /// Write the config template to `path`, or to the default location.
    pub fn create_config(path: Option<&Path>) -> anyhow::Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Put your dialogue corpus at the 'data_file' path");
        println!("   2. Run 'jarvis chat' to start talking");
        println!();
        println!("🔧 Configuration options:");
        println!("   - data_file: corpus JSON, relative to this directory or the working directory");
        println!("   - features.web_search: open a web search when nothing matches");
        println!("   - search.engine_url: search engine used for the fallback");
        println!();
        Ok(config_path)
    }
}
