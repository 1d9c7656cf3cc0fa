//! Pending software update classification.
//!
//! A pending update is never urgent: everything except UNAVAILABLE is
//! WARNING, including statuses this plugin has never seen before.

use serde::Deserialize;
use serde_json::Value;

use super::CheckError;
use crate::verdict::Verdict;

/// Response of the `update/check_available` action.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCheckResult {
    pub status: String,
}

/// Known update statuses, from the TrueNAS REST API documentation.
const STATUS_DESCRIPTIONS: &[(&str, &str)] = &[
    ("UNAVAILABLE", "no update available"),
    ("AVAILABLE", "an update is available"),
    ("REBOOT_REQUIRED", "an update has already been applied"),
    ("HA_UNAVAILABLE", "HA is non-functional"),
];

const UPDATE_HINT: &str =
    "Update may be required. Go to TrueNAS Dashboard -> System -> Update to check for newer version.";

fn describe(status: &str) -> Option<&'static str> {
    STATUS_DESCRIPTIONS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, description)| *description)
}

/// Deserialize the payload and classify it.
pub fn classify(payload: Value) -> Result<Verdict, CheckError> {
    let result: UpdateCheckResult = serde_json::from_value(payload)
        .map_err(|source| CheckError::Shape { check: "update", source })?;
    Ok(evaluate(&result))
}

/// Classify the update-check result.
pub fn evaluate(result: &UpdateCheckResult) -> Verdict {
    let status = result.status.as_str();

    if status == "UNAVAILABLE" {
        return Verdict::ok("Update Status: UNAVAILABLE (no update available)");
    }

    match describe(status) {
        Some(description) => Verdict::warning(format!(
            "Update Status: {status} ({description}). {UPDATE_HINT}"
        )),
        None => Verdict::warning(format!("Unknown Update Status: {status}. {UPDATE_HINT}")),
    }
}
