use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one request. `Ok(None)` means the endpoint answered without content;
    /// transport and HTTP failures come back as `Err`.
    async fn complete(&self, system_instruction: &str, prompt: &str) -> Result<Option<String>>;
}

/// Offline client for `--dry-run`: answers with a fixed SKILL procedure.
pub struct MockLlmClient;

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system_instruction: &str, prompt: &str) -> Result<Option<String>> {
        if prompt.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(
            r#"procedure(mockTranslation()
    prog(()
        printf("dry run: no model was called\n")
    );prog
);procedure
"#
            .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_skill() {
        let client = MockLlmClient::new();
        let out = client.complete("sys", "translate me").await.unwrap().unwrap();
        assert!(out.starts_with("procedure("));
        assert!(out.contains(";procedure"));
    }

    #[tokio::test]
    async fn test_mock_empty_prompt_has_no_content() {
        let client = MockLlmClient::default();
        assert!(client.complete("sys", "  ").await.unwrap().is_none());
    }
}
