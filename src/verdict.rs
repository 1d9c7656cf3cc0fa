// SPDX-License-Identifier: MIT
//! Severity levels and the final check verdict.
//!
//! A check invocation produces exactly one [`Verdict`], rendered as a single
//! plugin line on stdout and a matching process exit code.

/// Severity level of a check outcome, in monitoring-plugin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The checked resource is healthy.
    Ok,
    /// The resource needs attention but is not down.
    Warning,
    /// The resource is faulted or unavailable.
    Critical,
    /// The check itself could not be completed (transport or payload failure).
    Unknown,
}

impl Severity {
    /// Process exit code understood by the monitoring framework.
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
            Severity::Unknown => 3,
        }
    }

    /// Returns the worse of two combinable severities.
    ///
    /// `Unknown` is not combinable — it aborts a check outright and never
    /// competes with findings — so it is not accepted here.
    pub fn worst(a: Severity, b: Severity) -> Severity {
        debug_assert!(a != Severity::Unknown && b != Severity::Unknown);
        match (a, b) {
            (Severity::Critical, _) | (_, Severity::Critical) => Severity::Critical,
            (Severity::Warning, _) | (_, Severity::Warning) => Severity::Warning,
            _ => Severity::Ok,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Ok => write!(f, "OK"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The outcome of one check invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub message: String,
}

impl Verdict {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Unknown,
            message: message.into(),
        }
    }

    /// Render the single stdout line: `<LEVEL_WORD> - <message>`.
    ///
    /// The first token must stay machine-parsable by the monitoring framework.
    pub fn plugin_line(&self) -> String {
        format!("{} - {}", self.severity, self.message)
    }
}
