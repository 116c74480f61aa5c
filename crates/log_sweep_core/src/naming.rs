use std::collections::HashSet;

/// Prefix CloudWatch gives every Lambda-owned log group.
pub const LOG_GROUP_PREFIX: &str = "/aws/lambda/";

/// Retention decision for a single enumerated log group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupDecision {
    /// The owning function still exists; the group is kept.
    Retain,
    /// No deployed function matches; the group is an orphan.
    Remove,
}

/// Function name a log group would belong to under the naming convention.
///
/// Names that do not carry the prefix are returned whole; no deployed
/// function can own them, so they classify as orphans either way.
pub fn derived_function_name(group_name: &str) -> &str {
    group_name
        .strip_prefix(LOG_GROUP_PREFIX)
        .unwrap_or(group_name)
}

pub fn classify_group(group_name: &str, function_names: &HashSet<String>) -> GroupDecision {
    if function_names.contains(derived_function_name(group_name)) {
        GroupDecision::Retain
    } else {
        GroupDecision::Remove
    }
}
