use tracing::debug;

use crate::{Result, TrieError, LOG_TARGET};

/// Rejects an empty string argument before any traversal or mutation happens.
pub(crate) fn require_non_empty(
    operation: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<()> {
    if value.is_empty() {
        debug!(target: LOG_TARGET, operation, argument, "Rejecting empty string argument");
        return Err(TrieError::InvalidArgument {
            operation,
            argument,
            reason: "must be a non-empty string",
        });
    }
    Ok(())
}
