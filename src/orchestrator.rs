//! Check orchestration: level-by-level parallel execution.
//!
//! The orchestrator owns one run. It selects checks (single id or tag
//! filter), levels the dependency graph, and executes each level with at
//! most P concurrent tasks gated by a semaphore. Levels are strictly
//! sequential: level k+1 reads the passed-set populated by level k.
//!
//! One mutex guards the shared state of a run: the passed-set, the
//! pre-allocated result and violation slots (each worker writes its own
//! index, so reported order always matches configuration order), and the
//! fail-fast flag. Everything else is task-local.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::{Check, LoadedConfig};
use crate::error::{ConfigError, ExecutionError, VibeGuardError};
use crate::events;
use crate::extraction::{output_snippet, GrokMatcher};
use crate::expr;
use crate::graph::Levels;
use crate::interp;
use crate::runner;
use crate::types::{CheckResult, CheckStatus, Event, RunReport, TriggeredPrompt, Violation};

/// Default level parallelism.
pub const DEFAULT_PARALLELISM: usize = 4;

/// Options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub parallel: usize,
    pub fail_fast: bool,
    /// Include set: empty means "all". A check is included when its tags
    /// intersect this set.
    pub include_tags: Vec<String>,
    /// Exclude set: a check is dropped when its tags intersect this set.
    pub exclude_tags: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            parallel: DEFAULT_PARALLELISM,
            fail_fast: false,
            include_tags: Vec::new(),
            exclude_tags: Vec::new(),
        }
    }
}

/// Per-invocation orchestrator. Constructed from a validated config;
/// holds no process-wide state.
pub struct Orchestrator {
    loaded: Arc<LoadedConfig>,
    options: RunOptions,
}

struct SharedState {
    passed: HashSet<String>,
    results: Vec<Option<CheckResult>>,
    violations: Vec<Option<Violation>>,
    fail_fast_triggered: bool,
}

impl Orchestrator {
    #[must_use]
    pub fn new(loaded: LoadedConfig, options: RunOptions) -> Self {
        Self {
            loaded: Arc::new(loaded),
            options,
        }
    }

    /// Run every selected check, level by level.
    pub async fn run(&self) -> RunReport {
        let selected = self.selected_indices();
        let selected_ids: HashSet<String> = selected
            .iter()
            .map(|&i| self.loaded.config.checks[i].id.clone())
            .collect();

        let checks: Vec<&Check> = selected
            .iter()
            .map(|&i| &self.loaded.config.checks[i])
            .collect();
        let levels = Levels::build(&checks);

        let state = Arc::new(Mutex::new(SharedState {
            passed: HashSet::new(),
            results: vec![None; selected.len()],
            violations: (0..selected.len()).map(|_| None).collect(),
            fail_fast_triggered: false,
        }));
        let semaphore = Arc::new(Semaphore::new(self.options.parallel.max(1)));
        let cancel = CancellationToken::new();

        for level in levels.iter() {
            let mut tasks = JoinSet::new();

            for &slot in level {
                let config_index = selected[slot];
                let loaded = Arc::clone(&self.loaded);
                let state = Arc::clone(&state);
                let semaphore = Arc::clone(&semaphore);
                let cancel = cancel.clone();
                let selected_ids = selected_ids.clone();
                let fail_fast = self.options.fail_fast;

                tasks.spawn(async move {
                    let Ok(_permit) = semaphore.acquire().await else {
                        return;
                    };

                    let check = &loaded.config.checks[config_index];

                    // Dependency gate: requirements outside the run set
                    // are treated as satisfied.
                    let unmet = {
                        let state = lock(&state);
                        check
                            .requires
                            .iter()
                            .find(|dep| {
                                selected_ids.contains(dep.as_str())
                                    && !state.passed.contains(dep.as_str())
                            })
                            .cloned()
                    };
                    if let Some(dep) = unmet {
                        debug!(check = %check.id, dependency = %dep, "skipping check");
                        let result = CheckResult::unexecuted(
                            check.id.as_str(),
                            CheckStatus::Skipped,
                            Some(format!("dependency {dep:?} did not pass")),
                        );
                        lock(&state).results[slot] = Some(result);
                        return;
                    }

                    let (result, violation) =
                        execute_check(&loaded, config_index, &cancel).await;

                    let mut state = lock(&state);
                    if result.status == CheckStatus::Passed {
                        state.passed.insert(check.id.clone());
                    }
                    let trips_fail_fast = fail_fast
                        && violation
                            .as_ref()
                            .is_some_and(|v| v.severity == crate::types::Severity::Error);
                    state.results[slot] = Some(result);
                    state.violations[slot] = violation;
                    if trips_fail_fast && !state.fail_fast_triggered {
                        state.fail_fast_triggered = true;
                        cancel.cancel();
                    }
                });
            }

            while let Some(joined) = tasks.join_next().await {
                if let Err(e) = joined {
                    warn!("check worker terminated unexpectedly: {e}");
                }
            }
        }

        let state = Arc::try_unwrap(state)
            .map(|m| m.into_inner().unwrap_or_else(std::sync::PoisonError::into_inner))
            .unwrap_or_else(|shared| {
                let guard = lock(&shared);
                SharedState {
                    passed: guard.passed.clone(),
                    results: guard.results.clone(),
                    violations: guard.violations.clone(),
                    fail_fast_triggered: guard.fail_fast_triggered,
                }
            });

        let results: Vec<CheckResult> = state
            .results
            .into_iter()
            .enumerate()
            .map(|(slot, result)| {
                result.unwrap_or_else(|| {
                    let id = self.loaded.config.checks[selected[slot]].id.as_str();
                    CheckResult::unexecuted(
                        id,
                        CheckStatus::Failed,
                        Some("internal: check worker produced no result".to_string()),
                    )
                })
            })
            .collect();
        let violations: Vec<Violation> = state.violations.into_iter().flatten().collect();

        RunReport {
            results,
            violations,
            cancellation_triggered: state.fail_fast_triggered,
        }
    }

    /// Run exactly one check by id, without the dependency walk. Grok,
    /// assertion, timeout, suggestion rendering, and event evaluation all
    /// behave exactly as in the main path; the per-check execution
    /// function is shared.
    pub async fn run_single(&self, id: &str) -> Result<RunReport, VibeGuardError> {
        let index = self
            .loaded
            .config
            .checks
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| {
                ConfigError::new(&self.loaded.path, format!("check with ID {id:?} not found"))
            })?;

        let cancel = CancellationToken::new();
        let (result, violation) = execute_check(&self.loaded, index, &cancel).await;

        Ok(RunReport {
            results: vec![result],
            violations: violation.into_iter().collect(),
            cancellation_triggered: false,
        })
    }

    /// Config indices of the checks selected by the tag filter, in config
    /// order.
    fn selected_indices(&self) -> Vec<usize> {
        let include: HashSet<&str> = self.options.include_tags.iter().map(String::as_str).collect();
        let exclude: HashSet<&str> = self.options.exclude_tags.iter().map(String::as_str).collect();

        self.loaded
            .config
            .checks
            .iter()
            .enumerate()
            .filter(|(_, check)| {
                let tags: HashSet<&str> = check.tags.iter().map(String::as_str).collect();
                let included = include.is_empty() || !include.is_disjoint(&tags);
                let excluded = !exclude.is_empty() && !exclude.is_disjoint(&tags);
                included && !excluded
            })
            .map(|(i, _)| i)
            .collect()
    }
}

fn lock(state: &Arc<Mutex<SharedState>>) -> MutexGuard<'_, SharedState> {
    state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Execute one check end to end: interpolate, run, extract, assert,
/// synthesize the result, violation, and triggered prompts. Both the
/// level loop and the single-check path go through here, so the two
/// violation-creation sites cannot diverge.
async fn execute_check(
    loaded: &LoadedConfig,
    config_index: usize,
    cancel: &CancellationToken,
) -> (CheckResult, Option<Violation>) {
    let config = &loaded.config;
    let check = &config.checks[config_index];
    let line = loaded.lines.check_line(config_index);
    let vars = &config.vars;

    let command = interp::render(&check.run, vars);
    debug!(check = %check.id, command = %command, "running check");

    let outcome = match runner::run_shell(&command, check.effective_timeout(), cancel).await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(check = %check.id, "spawn failed: {e}");
            return failure(check, config, &command, None, String::new(), Duration::ZERO, BTreeMap::new(), false, Some(e.to_string()));
        }
    };

    if outcome.cancelled {
        let result = CheckResult {
            id: check.id.clone(),
            status: CheckStatus::Cancelled,
            duration: outcome.duration,
            exit_status: None,
            output: outcome.output,
            extracted: BTreeMap::new(),
            timed_out: false,
            triggered_prompts: Vec::new(),
            message: Some("cancelled by fail-fast".to_string()),
        };
        return (result, None);
    }

    if outcome.timed_out {
        let message = format!(
            "timed out after {}",
            humantime::format_duration(check.effective_timeout())
        );
        return failure(
            check,
            config,
            &command,
            None,
            outcome.output,
            outcome.duration,
            BTreeMap::new(),
            true,
            Some(message),
        );
    }

    // The extraction source is the combined output, unless the check
    // redirects it to a file.
    let extract_source = match &check.file {
        None => outcome.output.clone(),
        Some(path) => match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                let err = ExecutionError::new(
                    check.id.as_str(),
                    &loaded.path,
                    line,
                    format!("cannot read file {}: {e}", path.display()),
                );
                return failure(
                    check,
                    config,
                    &command,
                    outcome.exit_status,
                    outcome.output,
                    outcome.duration,
                    BTreeMap::new(),
                    false,
                    Some(err.to_string()),
                );
            }
        },
    };

    let mut extracted = BTreeMap::new();
    if let Some(spec) = &check.grok {
        match GrokMatcher::compile(spec) {
            Ok(matcher) => extracted = matcher.extract(&extract_source),
            Err(e) => {
                let err = ExecutionError::new(
                    check.id.as_str(),
                    &loaded.path,
                    line,
                    format!("{e} (output starts: {:?})", output_snippet(&extract_source)),
                );
                return failure(
                    check,
                    config,
                    &command,
                    outcome.exit_status,
                    outcome.output,
                    outcome.duration,
                    BTreeMap::new(),
                    false,
                    Some(err.to_string()),
                );
            }
        }
    }

    let assert_src = check.assert.as_deref().filter(|s| !s.trim().is_empty());
    let passed = match assert_src {
        None => outcome.exit_status == Some(0),
        Some(source) => {
            let env = interp::merge_env(vars, &extracted);
            match expr::evaluate_bool(source, &env) {
                Ok(value) => value,
                Err(e) => {
                    let err = ExecutionError::new(
                        check.id.as_str(),
                        &loaded.path,
                        line,
                        format!("assertion {source:?}: {e}"),
                    );
                    return failure(
                        check,
                        config,
                        &command,
                        outcome.exit_status,
                        outcome.output,
                        outcome.duration,
                        extracted,
                        false,
                        Some(err.to_string()),
                    );
                }
            }
        }
    };

    if passed {
        let prompts = events::resolve(check.on.as_ref(), Event::Success, config);
        let result = CheckResult {
            id: check.id.clone(),
            status: CheckStatus::Passed,
            duration: outcome.duration,
            exit_status: outcome.exit_status,
            output: outcome.output,
            extracted,
            timed_out: false,
            triggered_prompts: prompts,
            message: None,
        };
        return (result, None);
    }

    let message = match (assert_src, outcome.exit_status) {
        (Some(source), _) => Some(format!("assertion {source:?} evaluated to false")),
        (None, Some(code)) => Some(format!("exit status {code}")),
        (None, None) => Some("terminated by signal".to_string()),
    };
    failure(
        check,
        config,
        &command,
        outcome.exit_status,
        outcome.output,
        outcome.duration,
        extracted,
        false,
        message,
    )
}

/// Build the failed result + violation pair. Every non-pass terminal
/// outcome funnels through here so the violation shape stays identical
/// everywhere.
#[allow(clippy::too_many_arguments)]
fn failure(
    check: &Check,
    config: &crate::config::Config,
    command: &str,
    exit_status: Option<i32>,
    output: String,
    duration: Duration,
    extracted: BTreeMap<String, String>,
    timed_out: bool,
    message: Option<String>,
) -> (CheckResult, Option<Violation>) {
    let event = events::event_for_outcome(false, timed_out);
    let prompts: Vec<TriggeredPrompt> = events::resolve(check.on.as_ref(), event, config);
    let suggestion = check
        .suggestion
        .as_ref()
        .map(|s| interp::render_with(s, &config.vars, &extracted));

    let result = CheckResult {
        id: check.id.clone(),
        status: CheckStatus::Failed,
        duration,
        exit_status,
        output,
        extracted: extracted.clone(),
        timed_out,
        triggered_prompts: prompts.clone(),
        message,
    };
    let violation = Violation {
        check_id: check.id.clone(),
        severity: check.severity,
        command: command.to_string(),
        suggestion,
        extracted,
        timed_out,
        triggered_prompts: prompts,
    };
    (result, Some(violation))
}
