use std::collections::HashSet;

use serde_json::{json, Value};

use log_sweep_core::contract::ReconciliationResult;
use log_sweep_core::naming::{classify_group, GroupDecision, LOG_GROUP_PREFIX};

use crate::adapters::function_registry::FunctionRegistry;
use crate::adapters::log_registry::LogGroupRegistry;

/// Ceiling on pagination rounds per listing. A registry that still returns a
/// continuation cursor after this many pages is treated as misbehaving and
/// the enumeration fails rather than looping forever.
pub const MAX_ENUMERATION_PAGES: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationError {
    message: String,
}

impl EnumerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EnumerationError {}

/// Full set of function names known to the registry, accumulated across
/// marker-continued pages. Any page failure discards partial results.
pub fn collect_function_names(
    registry: &impl FunctionRegistry,
) -> Result<HashSet<String>, EnumerationError> {
    let mut names = HashSet::new();
    let mut marker: Option<String> = None;

    for _ in 0..MAX_ENUMERATION_PAGES {
        let page = registry
            .list_functions_page(marker.as_deref())
            .map_err(|error| EnumerationError::new(format!("Failed to list functions: {error}")))?;
        names.extend(page.function_names);
        match page.next_marker {
            Some(next) => marker = Some(next),
            None => return Ok(names),
        }
    }

    Err(EnumerationError::new(format!(
        "Function listing did not finish within {MAX_ENUMERATION_PAGES} pages"
    )))
}

/// Full list of log group names under the naming-convention prefix, in
/// registry enumeration order, accumulated across token-continued pages.
pub fn collect_log_group_names(
    registry: &impl LogGroupRegistry,
) -> Result<Vec<String>, EnumerationError> {
    let mut names = Vec::new();
    let mut token: Option<String> = None;

    for _ in 0..MAX_ENUMERATION_PAGES {
        let page = registry
            .describe_log_groups_page(LOG_GROUP_PREFIX, token.as_deref())
            .map_err(|error| {
                EnumerationError::new(format!("Failed to list log groups: {error}"))
            })?;
        names.extend(page.group_names);
        match page.next_token {
            Some(next) => token = Some(next),
            None => return Ok(names),
        }
    }

    Err(EnumerationError::new(format!(
        "Log group listing did not finish within {MAX_ENUMERATION_PAGES} pages"
    )))
}

/// One reconciliation pass: enumerate both registries, delete log groups
/// whose function no longer exists, and tally outcomes.
///
/// The triggering event is opaque; it is logged and otherwise ignored.
/// Enumeration failures abort the run before any deletion is attempted.
pub fn handle_cleanup_event(
    event: &Value,
    functions: &impl FunctionRegistry,
    log_groups: &impl LogGroupRegistry,
) -> Result<ReconciliationResult, EnumerationError> {
    log_cleanup_info("event_received", json!({ "event": event }));

    let function_names = collect_function_names(functions)?;
    log_cleanup_info(
        "functions_enumerated",
        json!({ "count": function_names.len() }),
    );

    let group_names = collect_log_group_names(log_groups)?;
    log_cleanup_info(
        "log_groups_enumerated",
        json!({ "count": group_names.len(), "prefix": LOG_GROUP_PREFIX }),
    );

    let mut result = ReconciliationResult::default();

    // Groups are processed strictly in enumeration order; one failed delete
    // must not stop the rest of the batch.
    for group_name in &group_names {
        result.groups_processed += 1;

        match classify_group(group_name, &function_names) {
            GroupDecision::Retain => {
                result.groups_ignored += 1;
                log_cleanup_info("group_ignored", json!({ "group": group_name }));
            }
            GroupDecision::Remove => match log_groups.delete_log_group(group_name) {
                Ok(()) => {
                    result.groups_deleted += 1;
                    log_cleanup_info("group_deleted", json!({ "group": group_name }));
                }
                Err(error) => {
                    result.groups_failed += 1;
                    log_cleanup_error(
                        "group_delete_failed",
                        json!({ "group": group_name, "error": error }),
                    );
                }
            },
        }
    }

    debug_assert!(result.is_consistent());
    log_cleanup_info("sweep_completed", json!(result));
    Ok(result)
}

fn log_cleanup_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "cleanup_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_cleanup_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "cleanup_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
