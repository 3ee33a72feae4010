use thiserror::Error;

/// Failure raised by a host's attribute or event primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HealthError {
    /// The host has no value stored under `key`, usually because no health
    /// component was attached to it.
    #[error("`{name}` has no `{key}` attribute; attach a health component first")]
    MissingAttribute { name: String, key: String },

    /// The host entity no longer exists.
    #[error("host entity `{name}` no longer exists")]
    HostGone { name: String },
}

/// Collected failures of a batch operation. Every entity of the batch was
/// visited; `failures` lists the ones that could not be updated, by index.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} of {total} entities failed; first: {}", .failures.len(), first_message(.failures))]
pub struct BatchError {
    pub total: usize,
    pub failures: Vec<(usize, HealthError)>,
}

impl BatchError {
    /// `Ok(())` when nothing failed.
    pub fn check(total: usize, failures: Vec<(usize, HealthError)>) -> Result<(), BatchError> {
        if failures.is_empty() {
            Ok(())
        } else {
            Err(BatchError { total, failures })
        }
    }
}

fn first_message(failures: &[(usize, HealthError)]) -> String {
    failures
        .first()
        .map(|(index, err)| format!("#{index}: {err}"))
        .unwrap_or_default()
}
