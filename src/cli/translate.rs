use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use super::{load_config, Overrides};
use crate::llm::factory;
use crate::llm::prompts::PromptAssembler;
use crate::pipeline::translator::{TranslationOutcome, Translator};

pub async fn run(
    tcl_file: &str,
    skill_file: &str,
    config_path: Option<String>,
    overrides: &Overrides,
    strip_fences: bool,
    dry_run: bool,
) -> Result<TranslationOutcome> {
    let input = Path::new(tcl_file);
    if !input.is_file() {
        bail!("TCL file not found: {}", tcl_file);
    }

    let config = load_config(config_path, overrides)?;
    info!("Input: {}", tcl_file);
    info!("Output: {}", skill_file);
    info!("Provider: {} ({})", config.llm.provider, config.llm.model);
    info!("Dry run: {}", dry_run);

    let assembler = PromptAssembler::load(&config.resources)?;
    let client = factory::create_client(&config.llm, dry_run)?;

    let translator = Translator::new(client, assembler)
        .with_system_instruction(config.llm.system_instruction.clone())
        .with_strip_fences(strip_fences);

    let outcome = translator.translate_file(input, Path::new(skill_file)).await?;
    if let TranslationOutcome::Written { bytes } = outcome {
        info!("Wrote {} bytes to {}", bytes, skill_file);
    }
    Ok(outcome)
}
