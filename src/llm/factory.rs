use anyhow::{bail, Result};
use tracing::debug;

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::{AnthropicClient, GeminiClient, OpenAIClient};
use crate::config::LlmConfig;

const OPENAI_COMPATIBLE_DEFAULT_URL: &str = "http://localhost:11434/v1";

/// Create an LLM client from the `[llm]` config section
pub fn create_client(llm_config: &LlmConfig, dry_run: bool) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        debug!("Dry run: using mock LLM client");
        return Ok(Box::new(MockLlmClient::new()));
    }

    let api_key = llm_config.get_api_key()?;
    let model = llm_config.model.clone();
    let max_tokens = llm_config.get_max_tokens();
    let timeout = llm_config.timeout_secs;
    let base_url = llm_config.base_url.clone();

    match llm_config.provider.as_str() {
        "gemini" => Ok(Box::new(match base_url {
            Some(url) => GeminiClient::with_base_url(api_key, model, url, max_tokens, timeout)?,
            None => GeminiClient::new(api_key, model, max_tokens, timeout)?,
        })),

        "anthropic" => Ok(Box::new(match base_url {
            Some(url) => AnthropicClient::with_base_url(api_key, model, url, max_tokens, timeout)?,
            None => AnthropicClient::new(api_key, model, max_tokens, timeout)?,
        })),

        "openai" => Ok(Box::new(match base_url {
            Some(url) => OpenAIClient::with_base_url(api_key, model, url, max_tokens, timeout)?,
            None => OpenAIClient::new(api_key, model, max_tokens, timeout)?,
        })),

        "openai-compatible" => {
            let url = base_url.unwrap_or_else(|| OPENAI_COMPATIBLE_DEFAULT_URL.to_string());
            Ok(Box::new(OpenAIClient::with_base_url(
                api_key, model, url, max_tokens, timeout,
            )?))
        }

        unknown => bail!("Unknown LLM provider: {}", unknown),
    }
}
