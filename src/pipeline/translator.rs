use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

use crate::config::DEFAULT_SYSTEM_INSTRUCTION;
use crate::llm::client::LlmClient;
use crate::llm::prompts::PromptAssembler;

/// Strip one surrounding code fence (```skill ... ``` or ``` ... ```) if present.
pub fn strip_code_fences(content: &str) -> String {
    let trimmed = content.trim();

    if !(trimmed.starts_with("```") && trimmed.ends_with("```")) || trimmed.len() < 6 {
        return content.to_string();
    }

    let inner = &trimmed[3..trimmed.len() - 3];
    // Drop the info string (e.g. "skill", "lisp") on the opening fence line
    let body = match inner.find('\n') {
        Some(idx) if !inner[..idx].trim().contains(' ') => &inner[idx + 1..],
        _ => inner,
    };
    let mut out = body.trim().to_string();
    out.push('\n');
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// Output file written with this many bytes
    Written { bytes: usize },
    /// The model produced no content; nothing was written
    Empty,
}

pub struct Translator {
    client: Box<dyn LlmClient>,
    assembler: PromptAssembler,
    system_instruction: String,
    strip_fences: bool,
}

impl Translator {
    pub fn new(client: Box<dyn LlmClient>, assembler: PromptAssembler) -> Self {
        Self {
            client,
            assembler,
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            strip_fences: false,
        }
    }

    pub fn with_system_instruction(mut self, instruction: String) -> Self {
        self.system_instruction = instruction;
        self
    }

    pub fn with_strip_fences(mut self, strip: bool) -> Self {
        self.strip_fences = strip;
        self
    }

    /// One prompt, one model call. `Ok(None)` when the model returned nothing.
    pub async fn translate(&self, tcl_code: &str) -> Result<Option<String>> {
        let prompt = self.assembler.build(tcl_code);
        debug!("Assembled prompt ({} chars)", prompt.len());

        info!("Starting inference for code generation...");
        let response = self
            .client
            .complete(&self.system_instruction, &prompt)
            .await?;

        Ok(response.map(|text| {
            if self.strip_fences {
                strip_code_fences(&text)
            } else {
                text
            }
        }))
    }

    /// Translate `tcl_path` into `skill_path`. The output file is only
    /// created when the model returned content.
    pub async fn translate_file(
        &self,
        tcl_path: &Path,
        skill_path: &Path,
    ) -> Result<TranslationOutcome> {
        info!("Translating TCL to SKILL...");

        let content = fs::read_to_string(tcl_path)
            .with_context(|| format!("Failed to read TCL file {}", tcl_path.display()))?;

        match self.translate(&content).await? {
            Some(skill) => {
                info!("Translation successful. Writing to output file...");
                fs::write(skill_path, &skill)
                    .with_context(|| format!("Failed to write {}", skill_path.display()))?;
                Ok(TranslationOutcome::Written { bytes: skill.len() })
            }
            None => {
                error!("Failed to generate SKILL code from TCL input.");
                Ok(TranslationOutcome::Empty)
            }
        }
    }
}
