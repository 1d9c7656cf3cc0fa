// SPDX-License-Identifier: MIT
//! Check dispatch — maps a requested category to its API resource, HTTP
//! method, and classifier, and reduces every failure to a single verdict.
//!
//! Each category is one GET/POST against the v2.0 API followed by one
//! classification pass. Transport failures and payload-shape failures both
//! collapse to UNKNOWN; no partial classification result ever reaches stdout.

pub mod alerts;
pub mod pools;
pub mod replication;
pub mod update;

use crate::config::ProbeConfig;
use crate::transport::{ApiClient, RequestMethod, TransportError};
use crate::verdict::Verdict;

/// The four supported check categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Alerts,
    Zpool,
    Repl,
    Update,
}

impl CheckKind {
    /// All accepted `--type` values, for the unknown-category message.
    pub const NAMES: &'static [&'static str] = &["alerts", "zpool", "repl", "update"];

    /// Parse the CLI category string.
    ///
    /// Unrecognized values are not a usage error: they become an UNKNOWN
    /// verdict in [`run`] without ever reaching the transport.
    pub fn parse(s: &str) -> Option<CheckKind> {
        match s {
            "alerts" => Some(CheckKind::Alerts),
            "zpool" => Some(CheckKind::Zpool),
            "repl" => Some(CheckKind::Repl),
            "update" => Some(CheckKind::Update),
            _ => None,
        }
    }

    /// API resource path under `/api/v2.0/`.
    fn resource(self) -> &'static str {
        match self {
            CheckKind::Alerts => "alert/list",
            CheckKind::Zpool => "pool",
            CheckKind::Repl => "replication",
            CheckKind::Update => "update/check_available",
        }
    }

    /// HTTP method. Update-checking is a POST: the upstream API models it as
    /// an action, not a read.
    fn method(self) -> RequestMethod {
        match self {
            CheckKind::Update => RequestMethod::Post,
            _ => RequestMethod::Get,
        }
    }
}

/// A failed check. Both variants map to an UNKNOWN verdict (exit 3).
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("request failed - {0}")]
    Transport(#[from] TransportError),
    #[error("unexpected {check} payload shape: {source}")]
    Shape {
        check: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Run one check: resolve the category, perform the single API call, classify.
pub async fn run(client: &ApiClient, config: &ProbeConfig, category: &str) -> Verdict {
    let Some(kind) = CheckKind::parse(category) else {
        return Verdict::unknown(format!(
            "unknown check type: {category} (expected one of: {})",
            CheckKind::NAMES.join(", ")
        ));
    };

    let payload = match client.request(kind.resource(), kind.method()).await {
        Ok(payload) => payload,
        Err(e) => return Verdict::unknown(CheckError::from(e).to_string()),
    };

    let result = match kind {
        CheckKind::Alerts => alerts::classify(payload, config.ignore_dismissed),
        CheckKind::Zpool => pools::classify(payload, &config.pool_name),
        CheckKind::Repl => replication::classify(payload),
        CheckKind::Update => update::classify(payload),
    };

    result.unwrap_or_else(|e| Verdict::unknown(e.to_string()))
}
