// Prompt assembly for TCL -> SKILL translation

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::catalog::ApiCatalog;
use crate::config::ResourcesConfig;
use crate::detector::contains_api;
use crate::error::ResourceError;

pub const PREAMBLE: &str = "Translate the following TCL code snippets into clean, idiomatic SKILL code suitable for execution in Cadence Virtuoso. Ensure the translated code preserves the original logic and structure. Only output the SKILL code; do not include explanations or commentary.";

pub const API_SECTION_HEADER: &str = "### API Reference";

pub const TARGET_SECTION_HEADER: &str = "### Target Translation";

/// Static material embedded verbatim in every prompt.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    syntax_reference: String,
    examples: String,
    catalog: ApiCatalog,
}

impl PromptAssembler {
    pub fn new(syntax_reference: String, examples: String, catalog: ApiCatalog) -> Self {
        Self {
            syntax_reference,
            examples,
            catalog,
        }
    }

    /// Read every reference file up front. Any missing file is fatal.
    pub fn load(resources: &ResourcesConfig) -> Result<Self, ResourceError> {
        let syntax_reference = read_reference("syntax reference", &resources.syntax_reference)?;
        let examples = read_reference("examples", &resources.examples)?;
        let catalog = ApiCatalog::load(&resources.api_catalog)?;
        Ok(Self::new(syntax_reference, examples, catalog))
    }

    pub fn catalog(&self) -> &ApiCatalog {
        &self.catalog
    }

    /// Snippets of every catalog entry named in `tcl_code`, in catalog order.
    /// Empty when nothing matches.
    pub fn api_section(&self, tcl_code: &str) -> String {
        let mut section = String::new();
        for entry in self.catalog.entries() {
            if !contains_api(tcl_code, &entry.name) {
                continue;
            }
            for snippet in &entry.snippets {
                section.push_str(snippet);
                section.push('\n');
            }
        }
        section
    }

    pub fn build(&self, tcl_code: &str) -> String {
        let api_section = self.api_section(tcl_code);

        let mut prompt = String::with_capacity(
            PREAMBLE.len()
                + self.syntax_reference.len()
                + api_section.len()
                + self.examples.len()
                + tcl_code.len()
                + 128,
        );

        prompt.push_str(PREAMBLE);
        prompt.push_str("\n\n");
        push_block(&mut prompt, &self.syntax_reference);

        if api_section.is_empty() {
            debug!("No catalog APIs referenced in input");
        } else {
            prompt.push_str(API_SECTION_HEADER);
            prompt.push_str("\n\n");
            push_block(&mut prompt, &api_section);
        }

        push_block(&mut prompt, &self.examples);

        prompt.push_str(TARGET_SECTION_HEADER);
        prompt.push_str("\nTCL Input:\n```tcl\n");
        prompt.push_str(tcl_code);
        prompt.push_str("\n```\n");

        prompt
    }
}

fn read_reference(kind: &'static str, path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|e| ResourceError::unreadable(kind, path, e))
}

/// Append `block` verbatim followed by one blank line.
fn push_block(prompt: &mut String, block: &str) {
    prompt.push_str(block);
    if !block.ends_with('\n') {
        prompt.push('\n');
    }
    prompt.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assembler() -> PromptAssembler {
        PromptAssembler::new(
            "SYNTAX: set x 1 -> x = 1\n".to_string(),
            "EXAMPLE: puts -> printf".to_string(),
            ApiCatalog::from_entries([
                ("open_cell", vec!["DOC open_cell"]),
                ("place_row", vec!["DOC place_row 1", "DOC place_row 2"]),
                ("redraw", vec!["DOC redraw"]),
            ]),
        )
    }

    #[test]
    fn test_build_section_order() {
        let prompt = assembler().build("redraw\nopen_cell lib top layout");

        let preamble = prompt.find(PREAMBLE).unwrap();
        let syntax = prompt.find("SYNTAX:").unwrap();
        let header = prompt.find(API_SECTION_HEADER).unwrap();
        let example = prompt.find("EXAMPLE:").unwrap();
        let target = prompt.find(TARGET_SECTION_HEADER).unwrap();
        assert!(preamble < syntax);
        assert!(syntax < header);
        assert!(header < example);
        assert!(example < target);
        assert_eq!(preamble, 0);
    }

    #[test]
    fn test_api_section_follows_catalog_order() {
        let section = assembler().api_section("redraw; place_row; open_cell");
        assert_eq!(
            section,
            "DOC open_cell\nDOC place_row 1\nDOC place_row 2\nDOC redraw\n"
        );
    }

    #[test]
    fn test_no_match_omits_api_section() {
        let prompt = assembler().build("puts hello");
        assert!(!prompt.contains(API_SECTION_HEADER));
        assert!(!prompt.contains("DOC"));
    }

    #[test]
    fn test_input_is_fenced_verbatim() {
        let code = "set a {$b} ; # {{braces}} and `ticks`";
        let prompt = assembler().build(code);
        assert!(prompt.ends_with(&format!("TCL Input:\n```tcl\n{}\n```\n", code)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let assembler = assembler();
        let code = "place_row cv tap 8 0.5 {0 0}";
        assert_eq!(assembler.build(code), assembler.build(code));
    }

    #[test]
    fn test_load_missing_reference_is_fatal() {
        let resources = ResourcesConfig::in_dir("/nonexistent/tcl2skill-refs");
        let err = PromptAssembler::load(&resources).unwrap_err();
        assert!(err.to_string().contains("syntax reference"));
    }

    #[test]
    fn test_load_bundled_references() {
        let resources = ResourcesConfig::in_dir(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));
        let assembler = PromptAssembler::load(&resources).unwrap();
        let prompt = assembler.build("puts \"hi\"");
        assert!(prompt.contains("### TCL to SKILL Syntax Reference"));
        assert!(prompt.contains("### Example 1"));
    }
}
