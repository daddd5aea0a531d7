use std::fs;

use anyhow::{Context, Result};

use super::{load_config, Overrides};
use crate::llm::prompts::PromptAssembler;

/// Print the prompt that `translate` would send, without calling a model.
pub fn run(path: &str, config_path: Option<String>, overrides: &Overrides) -> Result<()> {
    let tcl_code =
        fs::read_to_string(path).with_context(|| format!("Failed to read TCL file {}", path))?;
    let config = load_config(config_path, overrides)?;
    let assembler = PromptAssembler::load(&config.resources)?;
    print!("{}", assembler.build(&tcl_code));
    Ok(())
}
