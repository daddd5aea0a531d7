use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tcl2skill::cli::{self, Overrides};

#[derive(Parser)]
#[command(name = "tcl2skill", version)]
#[command(about = "Translate TCL scripts into Cadence SKILL code", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonArgs {
    /// Path to config file (defaults to ./tcl2skill.toml or ~/.config/tcl2skill/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Directory holding syntax_reference.md, examples.md and syntax_reference_api.json
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a TCL file into a SKILL file
    Translate {
        /// Path to the input TCL file
        #[arg(long = "tcl-file", alias = "tcl_file")]
        tcl_file: String,

        /// Path to the output SKILL file
        #[arg(long = "skill-file", alias = "skill_file")]
        skill_file: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Override LLM provider (gemini, anthropic, openai, openai-compatible)
        #[arg(long)]
        provider: Option<String>,

        /// Override LLM model (e.g., "gemini-2.5-flash", "gpt-4o")
        #[arg(long)]
        model: Option<String>,

        /// Override the provider base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Request timeout in seconds (default: none)
        #[arg(long)]
        timeout: Option<u64>,

        /// Remove a surrounding ``` fence from the model output
        #[arg(long)]
        strip_fences: bool,

        /// Use mock LLM client for testing
        #[arg(long)]
        dry_run: bool,
    },

    /// Report which catalogued APIs occur in a TCL file
    Scan {
        /// TCL file to scan
        path: String,

        #[command(flatten)]
        common: CommonArgs,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent for a TCL file
    Prompt {
        /// TCL file to build the prompt for
        path: String,

        #[command(flatten)]
        common: CommonArgs,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stderr keeps `prompt` and `scan --json` output pipeable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Translate {
            tcl_file,
            skill_file,
            common,
            provider,
            model,
            base_url,
            timeout,
            strip_fences,
            dry_run,
        } => {
            let overrides = Overrides {
                provider,
                model,
                base_url,
                timeout_secs: timeout,
                data_dir: common.data_dir,
            };
            cli::translate::run(
                &tcl_file,
                &skill_file,
                common.config,
                &overrides,
                strip_fences,
                dry_run,
            )
            .await?;
        }
        Commands::Scan { path, common, json } => {
            let overrides = Overrides {
                data_dir: common.data_dir,
                ..Overrides::default()
            };
            cli::scan::run(&path, common.config, &overrides, json)?;
        }
        Commands::Prompt { path, common } => {
            let overrides = Overrides {
                data_dir: common.data_dir,
                ..Overrides::default()
            };
            cli::prompt::run(&path, common.config, &overrides)?;
        }
    }

    Ok(())
}
