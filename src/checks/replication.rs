//! Replication task health classification.
//!
//! A task is a problem when its state is neither FINISHED nor RUNNING —
//! RUNNING is a healthy in-progress state. Replication trouble is an
//! operational concern, never fatal, so the ceiling here is WARNING.

use serde::Deserialize;
use serde_json::Value;

use super::CheckError;
use crate::verdict::Verdict;

/// One entry of the `replication` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplicationTask {
    pub name: String,
    /// Nested on the wire: the state code lives at `state.state`.
    pub state: ReplicationState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplicationState {
    pub state: String,
}

/// Deserialize the payload and classify it.
pub fn classify(payload: Value) -> Result<Verdict, CheckError> {
    let tasks: Vec<ReplicationTask> = serde_json::from_value(payload)
        .map_err(|source| CheckError::Shape { check: "repl", source })?;
    Ok(evaluate(&tasks))
}

/// Classify the replication task list.
pub fn evaluate(tasks: &[ReplicationTask]) -> Verdict {
    let mut problems = Vec::new();
    let mut examined = Vec::new();

    for task in tasks {
        let code = task.state.state.as_str();
        examined.push(format!("{}: {code}", task.name));
        if code != "FINISHED" && code != "RUNNING" {
            problems.push(format!("{}: {code}", task.name));
        }
    }

    if problems.is_empty() {
        Verdict::ok(format!(
            "No replication errors. Replications examined: {}",
            examined.join(", ")
        ))
    } else {
        Verdict::warning(format!(
            "There are {} replication errors [{}]. Go to Storage > Replication Tasks > \
             View Replication Tasks in TrueNAS for more details.",
            problems.len(),
            problems.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdict::Severity;

    fn task(name: &str, state: &str) -> ReplicationTask {
        ReplicationTask {
            name: name.into(),
            state: ReplicationState {
                state: state.into(),
            },
        }
    }

    #[test]
    fn test_no_tasks_is_ok() {
        let v = evaluate(&[]);
        assert_eq!(v.severity, Severity::Ok);
    }

    #[test]
    fn test_finished_is_healthy() {
        let v = evaluate(&[task("offsite", "FINISHED")]);
        assert_eq!(v.severity, Severity::Ok);
        assert!(v.message.contains("offsite: FINISHED"));
    }

    #[test]
    fn test_running_is_healthy_in_progress() {
        let v = evaluate(&[task("r1", "RUNNING")]);
        assert_eq!(v.severity, Severity::Ok);
        assert!(v.message.contains("r1: RUNNING"));
    }

    #[test]
    fn test_error_is_warning_never_critical() {
        let v = evaluate(&[task("r1", "ERROR")]);
        assert_eq!(v.severity, Severity::Warning);
        assert!(v.message.contains("There are 1 replication errors"));
        assert!(v.message.contains("r1: ERROR"));
    }

    #[test]
    fn test_mixed_states_count_only_problems() {
        let v = evaluate(&[
            task("a", "FINISHED"),
            task("b", "FAILED"),
            task("c", "RUNNING"),
            task("d", "ERROR"),
        ]);
        assert_eq!(v.severity, Severity::Warning);
        assert!(v.message.contains("There are 2 replication errors"));
        assert!(v.message.contains("b: FAILED"));
        assert!(v.message.contains("d: ERROR"));
    }

    #[test]
    fn test_classify_rejects_flat_state() {
        // State code must be nested under "state.state".
        let payload = serde_json::json!([{ "name": "r1", "state": "FINISHED" }]);
        assert!(classify(payload).is_err());
    }
}
