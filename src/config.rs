use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are an expert EDA (Electronic Design Automation) engineer with extensive knowledge of both TCL and Cadence SKILL programming. Your task is to translate TCL scripts into functionally equivalent SKILL code. ";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Env var holding the API key. Unset means the provider's own variable
    /// (see `LlmConfig::api_key_env`).
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>, // Overrides the provider endpoint (proxies, local models)

    /// Optional: Override max_tokens for LLM requests
    /// If not specified, uses provider-specific defaults:
    /// - anthropic: 4096
    /// - openai: 4096
    /// - openai-compatible (ollama): 16384
    /// - gemini: 8192
    #[serde(default)]
    pub max_tokens: Option<u32>,

    /// Request timeout in seconds. Unset means the call may block indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_system_instruction")]
    pub system_instruction: String,
}

impl LlmConfig {
    /// Get max_tokens value, using provider-specific default if not specified
    pub fn get_max_tokens(&self) -> u32 {
        if let Some(tokens) = self.max_tokens {
            return tokens;
        }

        match self.provider.as_str() {
            "anthropic" => 4096,
            "openai" => 4096,
            "openai-compatible" => 16384,
            "gemini" => 8192,
            _ => 4096,
        }
    }

    /// Env var the API key is read from: the configured one, else the
    /// provider's conventional variable. openai-compatible has none.
    pub fn api_key_env(&self) -> Option<&str> {
        if let Some(ref env_var) = self.api_key_env {
            return Some(env_var);
        }
        match self.provider.as_str() {
            "gemini" => Some("GEMINI_API_KEY"),
            "anthropic" => Some("ANTHROPIC_API_KEY"),
            "openai" => Some("OPENAI_API_KEY"),
            _ => None,
        }
    }

    /// Get API key from the environment variable resolved by `api_key_env`
    pub fn get_api_key(&self) -> Result<String> {
        match self.api_key_env() {
            Some(env_var) => {
                // "none" means no API key needed (e.g., Ollama)
                if env_var.to_lowercase() == "none" {
                    return Ok(String::new());
                }

                // openai-compatible: local servers need no key, gateways do
                if self.provider == "openai-compatible" {
                    return Ok(env::var(env_var).unwrap_or_default());
                }

                env::var(env_var).map_err(|_| {
                    anyhow::anyhow!("API key not found in environment variable: {}", env_var)
                })
            }
            None => Ok(String::new()),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key_env: None,
            base_url: None,
            max_tokens: None,
            timeout_secs: None,
            system_instruction: default_system_instruction(),
        }
    }
}

/// Locations of the static reference data embedded into every prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    #[serde(default = "default_api_catalog")]
    pub api_catalog: PathBuf,
    #[serde(default = "default_syntax_reference")]
    pub syntax_reference: PathBuf,
    #[serde(default = "default_examples")]
    pub examples: PathBuf,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            api_catalog: default_api_catalog(),
            syntax_reference: default_syntax_reference(),
            examples: default_examples(),
        }
    }
}

impl ResourcesConfig {
    /// All three files under one directory, using the bundled file names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            api_catalog: dir.join("syntax_reference_api.json"),
            syntax_reference: dir.join("syntax_reference.md"),
            examples: dir.join("examples.md"),
        }
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-05-20".to_string()
}

fn default_system_instruction() -> String {
    DEFAULT_SYSTEM_INSTRUCTION.to_string()
}

fn default_api_catalog() -> PathBuf {
    PathBuf::from("data/syntax_reference_api.json")
}

fn default_syntax_reference() -> PathBuf {
    PathBuf::from("data/syntax_reference.md")
}

fn default_examples() -> PathBuf {
    PathBuf::from("data/examples.md")
}

impl Config {
    /// Load config from the working directory or user config directory
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // An explicit path must exist and parse
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path));
        }

        let mut candidates = vec![PathBuf::from("tcl2skill.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("tcl2skill").join("config.toml"));
        }
        Self::load_first_existing(&candidates)
    }

    /// First candidate that exists wins. Only a missing file falls through;
    /// an unreadable or malformed one is an error.
    pub fn load_first_existing(candidates: &[PathBuf]) -> Result<Self> {
        for config_path in candidates {
            let loaded = Self::try_load_from_path(config_path)
                .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
            if let Some(config) = loaded {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn try_load_from_path(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(toml::from_str(&content)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn get_api_key(&self) -> Result<String> {
        self.llm.get_api_key()
    }
}
