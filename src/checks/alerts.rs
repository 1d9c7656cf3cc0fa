//! System alert classification.
//!
//! Reduces the `alert/list` payload to one verdict. Critical findings are
//! always listed before warnings so they cannot be buried in a long message.

use serde::Deserialize;
use serde_json::Value;

use super::CheckError;
use crate::verdict::{Severity, Verdict};

/// One entry of the `alert/list` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    /// Alert level as reported by the appliance: "CRITICAL", "WARNING", or
    /// anything else (informational levels are not counted).
    pub level: String,
    /// Whether the operator dismissed the alert in the appliance UI.
    pub dismissed: bool,
    /// Pre-formatted human-readable alert text.
    pub formatted: String,
}

/// Deserialize the payload and classify it.
pub fn classify(payload: Value, ignore_dismissed: bool) -> Result<Verdict, CheckError> {
    let records: Vec<AlertRecord> = serde_json::from_value(payload)
        .map_err(|source| CheckError::Shape { check: "alerts", source })?;
    Ok(evaluate(&records, ignore_dismissed))
}

/// Classify a list of alert records.
pub fn evaluate(records: &[AlertRecord], ignore_dismissed: bool) -> Verdict {
    let mut severity = Severity::Ok;
    let mut critical = Vec::new();
    let mut warning = Vec::new();

    for alert in records {
        if ignore_dismissed && alert.dismissed {
            continue;
        }
        // Alert text may span lines; the plugin line must not.
        let text = alert.formatted.replace('\n', ". ");
        match alert.level.as_str() {
            "CRITICAL" => {
                severity = Severity::worst(severity, Severity::Critical);
                critical.push(format!("(C) {text}"));
            }
            "WARNING" => {
                severity = Severity::worst(severity, Severity::Warning);
                warning.push(format!("(W) {text}"));
            }
            _ => {}
        }
    }

    match severity {
        Severity::Critical => {
            critical.extend(warning);
            Verdict::critical(critical.join(" - "))
        }
        Severity::Warning => Verdict::warning(warning.join(" - ")),
        _ => Verdict::ok("No problem alerts"),
    }
}
