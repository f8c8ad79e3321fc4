//! Event handler resolution.
//!
//! A check's `on:` mapping binds outcomes to prompt references or inline
//! content. Exactly one event key fires per terminal outcome, selected by
//! precedence: timeout beats failure beats success. `skipped` and
//! `cancelled` outcomes never fire.

use crate::config::{Config, EventHandlers, EventValue};
use crate::types::{Event, TriggeredPrompt};
use crate::validate::is_identifier;

/// Source label used for inline content.
pub const INLINE_SOURCE: &str = "inline";

/// Pick the event for an executed check's outcome. Skipped and cancelled
/// checks never reach this point.
#[must_use]
pub fn event_for_outcome(passed: bool, timed_out: bool) -> Event {
    if timed_out {
        Event::Timeout
    } else if passed {
        Event::Success
    } else {
        Event::Failure
    }
}

/// Resolve the handler bound to `event` into triggered prompts.
///
/// Array entries that are identifier-shaped resolve against the config's
/// prompt table (missing ids are silently skipped; validation guarantees
/// they exist at load time); everything else is inline content.
#[must_use]
pub fn resolve(
    handlers: Option<&EventHandlers>,
    event: Event,
    config: &Config,
) -> Vec<TriggeredPrompt> {
    let Some(handlers) = handlers else {
        return Vec::new();
    };
    let value = match event {
        Event::Success => &handlers.success,
        Event::Failure => &handlers.failure,
        Event::Timeout => &handlers.timeout,
    };
    let Some(value) = value else {
        return Vec::new();
    };

    match value {
        EventValue::Inline(content) => vec![TriggeredPrompt {
            event,
            source: INLINE_SOURCE.to_string(),
            content: content.clone(),
        }],
        EventValue::Refs(entries) => entries
            .iter()
            .filter_map(|entry| {
                if is_identifier(entry) {
                    config.prompt(entry).map(|prompt| TriggeredPrompt {
                        event,
                        source: prompt.id.clone(),
                        content: prompt.content.clone(),
                    })
                } else {
                    Some(TriggeredPrompt {
                        event,
                        source: INLINE_SOURCE.to_string(),
                        content: entry.clone(),
                    })
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;
    use std::path::Path;

    fn config(raw: &str) -> Config {
        parse(raw, Path::new("vibeguard.yaml")).unwrap().config
    }

    #[test]
    fn outcome_precedence() {
        assert_eq!(event_for_outcome(false, true), Event::Timeout);
        assert_eq!(event_for_outcome(true, true), Event::Timeout);
        assert_eq!(event_for_outcome(false, false), Event::Failure);
        assert_eq!(event_for_outcome(true, false), Event::Success);
    }

    #[test]
    fn array_mixes_references_and_inline_content() {
        let cfg = config(
            r#"prompts:
  - id: init
    content: Follow the setup guide
checks:
  - id: vet
    run: "false"
    on:
      failure: [init, "Also re-run gofmt"]
"#,
        );
        let prompts = resolve(cfg.checks[0].on.as_ref(), Event::Failure, &cfg);
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].source, "init");
        assert_eq!(prompts[0].content, "Follow the setup guide");
        assert_eq!(prompts[0].event, Event::Failure);
        assert_eq!(prompts[1].source, "inline");
        assert_eq!(prompts[1].content, "Also re-run gofmt");
    }

    #[test]
    fn bare_string_is_inline() {
        let cfg = config(
            "checks:\n  - id: a\n    run: x\n    on:\n      success: \"nice work\"\n",
        );
        let prompts = resolve(cfg.checks[0].on.as_ref(), Event::Success, &cfg);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].source, "inline");
        assert_eq!(prompts[0].content, "nice work");
    }

    #[test]
    fn unbound_event_fires_nothing() {
        let cfg = config(
            "checks:\n  - id: a\n    run: x\n    on:\n      failure: \"oops\"\n",
        );
        assert!(resolve(cfg.checks[0].on.as_ref(), Event::Success, &cfg).is_empty());
        assert!(resolve(None, Event::Failure, &cfg).is_empty());
    }

    #[test]
    fn missing_prompt_reference_is_skipped_silently() {
        // Validation guarantees references exist; resolution stays total
        // anyway.
        let cfg = config(
            "checks:\n  - id: a\n    run: x\n    on:\n      failure: [ghost]\n",
        );
        assert!(resolve(cfg.checks[0].on.as_ref(), Event::Failure, &cfg).is_empty());
    }
}
