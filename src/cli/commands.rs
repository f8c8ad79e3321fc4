//! Subcommand handlers.
//!
//! Each handler returns the exit code for a completed run, or a
//! `VibeGuardError` that `run()` reports and maps. Report output goes to
//! stderr; raw prompt content and JSON go to stdout so they pipe cleanly.

use serde::Serialize;
use std::io::Write as _;
use std::path::Path;

use super::args::Cli;
use crate::config::{self, LoadedConfig};
use crate::error::{ConfigError, VibeGuardError};
use crate::exit_codes::ExitCode;
use crate::orchestrator::{Orchestrator, RunOptions};
use crate::report;
use crate::templates;
use crate::types::RunReport;
use crate::validate;

fn load_config(cli: &Cli) -> Result<LoadedConfig, VibeGuardError> {
    let cwd = std::env::current_dir()?;
    let loaded = config::discover(cli.config.as_deref(), &cwd)?;
    validate::validate(&loaded)?;
    Ok(loaded)
}

/// `vibeguard check [id]`
pub async fn execute_check(
    cli: &Cli,
    id: Option<&str>,
    tags: &[String],
    exclude_tags: &[String],
) -> Result<ExitCode, VibeGuardError> {
    let loaded = load_config(cli)?;
    let options = RunOptions {
        parallel: cli.parallel,
        fail_fast: cli.fail_fast,
        include_tags: tags.to_vec(),
        exclude_tags: exclude_tags.to_vec(),
    };
    let orchestrator = Orchestrator::new(loaded, options);

    let report = match id {
        Some(id) => orchestrator.run_single(id).await?,
        None => orchestrator.run().await,
    };

    emit_report(cli, &report)?;
    Ok(report.exit_code())
}

fn emit_report(cli: &Cli, run: &RunReport) -> Result<(), VibeGuardError> {
    if cli.json {
        let json = report::render_json(run)
            .map_err(|e| VibeGuardError::Io(std::io::Error::other(e)))?;
        println!("{json}");
    } else if cli.verbose {
        eprint!("{}", report::render_verbose(run));
    } else {
        let quiet = report::render_quiet(run);
        if !quiet.is_empty() {
            eprint!("{quiet}");
        }
    }
    Ok(())
}

/// `vibeguard validate`
pub fn execute_validate(cli: &Cli) -> Result<ExitCode, VibeGuardError> {
    let loaded = load_config(cli)?;
    if cli.json {
        #[derive(Serialize)]
        struct ValidateOutput<'a> {
            ok: bool,
            path: &'a Path,
            checks: usize,
            prompts: usize,
        }
        let out = ValidateOutput {
            ok: true,
            path: &loaded.path,
            checks: loaded.config.checks.len(),
            prompts: loaded.config.prompts.len(),
        };
        println!("{}", serde_json::to_string_pretty(&out).map_err(to_io)?);
    } else {
        println!(
            "ok: {} ({} checks, {} prompts)",
            loaded.path.display(),
            loaded.config.checks.len(),
            loaded.config.prompts.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// `vibeguard list`
pub fn execute_list(cli: &Cli) -> Result<ExitCode, VibeGuardError> {
    let loaded = load_config(cli)?;

    if cli.json {
        #[derive(Serialize)]
        struct ListEntry<'a> {
            id: &'a str,
            run: &'a str,
            severity: &'a str,
            tags: &'a [String],
            requires: &'a [String],
        }
        let entries: Vec<ListEntry> = loaded
            .config
            .checks
            .iter()
            .map(|c| ListEntry {
                id: &c.id,
                run: &c.run,
                severity: c.severity.as_str(),
                tags: &c.tags,
                requires: &c.requires,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries).map_err(to_io)?);
        return Ok(ExitCode::SUCCESS);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for check in &loaded.config.checks {
        if cli.verbose {
            let _ = writeln!(out, "{} ({})", check.id, check.severity.as_str());
            let _ = writeln!(out, "    run: {}", check.run);
            if !check.requires.is_empty() {
                let _ = writeln!(out, "    requires: {}", check.requires.join(", "));
            }
            if !check.tags.is_empty() {
                let _ = writeln!(out, "    tags: {}", check.tags.join(", "));
            }
        } else {
            let _ = writeln!(out, "{}", check.id);
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `vibeguard prompt [id]`
pub fn execute_prompt(cli: &Cli, id: Option<&str>) -> Result<ExitCode, VibeGuardError> {
    // The built-in init prompt stays available without any configuration
    // file; a user-defined `init` prompt takes precedence.
    let loaded = match load_config(cli) {
        Ok(loaded) => Some(loaded),
        Err(e) => match id {
            Some("init") | None => None,
            Some(_) => return Err(e),
        },
    };

    match id {
        Some(id) => {
            let content = loaded
                .as_ref()
                .and_then(|l| l.config.prompt(id))
                .map(|p| p.content.clone())
                .or_else(|| (id == "init").then(|| templates::BUILTIN_INIT_PROMPT.to_string()));
            let Some(content) = content else {
                let path = loaded
                    .map(|l| l.path)
                    .unwrap_or_else(|| "vibeguard.yaml".into());
                return Err(ConfigError::new(path, format!("prompt with ID {id:?} not found")).into());
            };
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
        None => {
            let prompts = loaded
                .as_ref()
                .map(|l| l.config.prompts.as_slice())
                .unwrap_or_default();

            if cli.json {
                #[derive(Serialize)]
                struct PromptEntry<'a> {
                    id: &'a str,
                    description: Option<&'a str>,
                    tags: &'a [String],
                    builtin: bool,
                }
                let mut entries: Vec<PromptEntry> = prompts
                    .iter()
                    .map(|p| PromptEntry {
                        id: &p.id,
                        description: p.description.as_deref(),
                        tags: &p.tags,
                        builtin: false,
                    })
                    .collect();
                if !prompts.iter().any(|p| p.id == "init") {
                    entries.push(PromptEntry {
                        id: "init",
                        description: Some("built-in setup prompt"),
                        tags: &[],
                        builtin: true,
                    });
                }
                println!("{}", serde_json::to_string_pretty(&entries).map_err(to_io)?);
                return Ok(ExitCode::SUCCESS);
            }

            for prompt in prompts {
                if cli.verbose {
                    println!(
                        "{}  {}",
                        prompt.id,
                        prompt.description.as_deref().unwrap_or("")
                    );
                } else {
                    println!("{}", prompt.id);
                }
            }
            if !prompts.iter().any(|p| p.id == "init") {
                if cli.verbose {
                    println!("init  built-in setup prompt");
                } else {
                    println!("init");
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// `vibeguard tags`
pub fn execute_tags(cli: &Cli) -> Result<ExitCode, VibeGuardError> {
    let loaded = load_config(cli)?;
    let mut tags: Vec<&str> = loaded
        .config
        .checks
        .iter()
        .flat_map(|c| c.tags.iter().map(String::as_str))
        .collect();
    tags.sort_unstable();
    tags.dedup();
    for tag in tags {
        println!("{tag}");
    }
    Ok(ExitCode::SUCCESS)
}

/// `vibeguard init [--template NAME | --list-templates | --assist]`
pub fn execute_init(
    template: Option<&str>,
    list_templates: bool,
    assist: bool,
) -> Result<ExitCode, VibeGuardError> {
    if assist {
        print!("{}", templates::ASSIST_PROMPT);
        return Ok(ExitCode::SUCCESS);
    }
    if list_templates {
        for name in templates::TEMPLATE_NAMES {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let name = template.unwrap_or("default");
    let Some(body) = templates::starter_template(name) else {
        return Err(ConfigError::new(
            name,
            format!(
                "unknown starter template (available: {})",
                templates::TEMPLATE_NAMES.join(", ")
            ),
        )
        .into());
    };

    let target = Path::new("vibeguard.yaml");
    if target.exists() {
        return Err(ConfigError::new(target, "already exists; refusing to overwrite").into());
    }
    std::fs::write(target, body)?;
    println!("wrote {} ({} template)", target.display(), name);
    Ok(ExitCode::SUCCESS)
}

fn to_io(e: serde_json::Error) -> VibeGuardError {
    VibeGuardError::Io(std::io::Error::other(e))
}
