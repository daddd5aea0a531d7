pub mod prompt;
pub mod scan;
pub mod translate;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub data_dir: Option<PathBuf>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref provider) = self.provider {
            info!("CLI override: provider = {}", provider);
            config.llm.provider = provider.clone();
        }
        if let Some(ref model) = self.model {
            info!("CLI override: model = {}", model);
            config.llm.model = model.clone();
        }
        if let Some(ref base_url) = self.base_url {
            info!("CLI override: base_url = {}", base_url);
            config.llm.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout_secs {
            info!("CLI override: timeout = {}s", timeout);
            config.llm.timeout_secs = Some(timeout);
        }
        if let Some(ref dir) = self.data_dir {
            info!("CLI override: data_dir = {}", dir.display());
            config.resources = crate::config::ResourcesConfig::in_dir(dir);
        }
    }
}

/// Load config (explicit path, working directory, or user config dir) and apply overrides
pub fn load_config(config_path: Option<String>, overrides: &Overrides) -> Result<Config> {
    let mut config = Config::load_with_path(config_path)?;
    overrides.apply(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let overrides = Overrides {
            provider: Some("openai".to_string()),
            model: Some("gpt-4o".to_string()),
            base_url: Some("http://proxy:8080/v1".to_string()),
            timeout_secs: Some(45),
            data_dir: Some(PathBuf::from("/srv/refs")),
        };
        overrides.apply(&mut config);
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.base_url.as_deref(), Some("http://proxy:8080/v1"));
        assert_eq!(config.llm.timeout_secs, Some(45));
        assert_eq!(
            config.resources.examples,
            PathBuf::from("/srv/refs/examples.md")
        );
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = Config::default();
        Overrides::default().apply(&mut config);
        assert_eq!(config.llm.provider, "gemini");
        assert!(config.llm.base_url.is_none());
    }
}
