//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vibeguard - declarative policy checks for CI, hooks, and agents
#[derive(Parser)]
#[command(name = "vibeguard")]
#[command(about = "Declarative policy-enforcement runner for CI pipelines, Git hooks, and AI-agent workflows")]
#[command(long_about = r#"
vibeguard runs the checks declared in a vibeguard.yaml file: shell commands
whose exit status, grok-extracted values, and assertions decide a pass/fail
verdict. Violations are reported with actionable guidance; silence means
success.

EXAMPLES:
  # Run every configured check
  vibeguard check

  # Run one check in isolation
  vibeguard check coverage

  # Only fast checks, skipping anything tagged e2e
  vibeguard check --tags fast --exclude-tags e2e

  # Machine-readable output for agents and CI
  vibeguard check --json

  # Validate the configuration without running anything
  vibeguard validate

  # Pipe a prompt into an agent CLI
  vibeguard prompt init | my-agent

EXIT CODES:
  0  success (warnings included)
  2  at least one error-severity check failed
  3  configuration error
  4  at least one check timed out (wins over 2)
"#)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (overrides discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output: one status line per check
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Structured JSON output on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Maximum number of checks running concurrently within a level
    #[arg(short, long, global = true, default_value_t = 4, env = "VIBEGUARD_PARALLEL")]
    pub parallel: usize,

    /// Cancel remaining checks after the first error-severity failure
    #[arg(long, global = true, env = "VIBEGUARD_FAIL_FAST")]
    pub fail_fast: bool,

    /// Directory for a plain-text run log
    #[arg(long, global = true, env = "VIBEGUARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run all checks, or a single check by id
    Check {
        /// Check id to run in isolation
        id: Option<String>,

        /// Only run checks whose tags intersect this set
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Drop checks whose tags intersect this set
        #[arg(long = "exclude-tags", value_delimiter = ',')]
        exclude_tags: Vec<String>,
    },

    /// Load and validate the configuration
    Validate,

    /// List configured check ids
    List,

    /// List prompts, or print one prompt's raw content to stdout
    Prompt {
        /// Prompt id to print
        id: Option<String>,
    },

    /// Print the sorted set of tags across all checks
    Tags,

    /// Write a starter configuration file
    Init {
        /// Starter template name (see --list-templates)
        #[arg(long)]
        template: Option<String>,

        /// List available starter templates
        #[arg(long)]
        list_templates: bool,

        /// Print the agent-setup prompt instead of writing a file
        #[arg(long)]
        assist: bool,
    },
}
