//! Storage pool (zpool) health classification.
//!
//! Any relevant pool whose status is not ONLINE is critical. A named filter
//! that matches no pool is also critical — that usually means a typo or a
//! pool that was removed from the system.

use serde::Deserialize;
use serde_json::Value;

use super::CheckError;
use crate::verdict::Verdict;

/// Filter value meaning "check every pool", matched case-insensitively.
pub const ALL_POOLS: &str = "all";

/// One entry of the `pool` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolRecord {
    pub name: String,
    /// "ONLINE" when healthy, otherwise a fault code such as "DEGRADED".
    pub status: String,
}

/// Deserialize the payload and classify it against the pool filter.
pub fn classify(payload: Value, pool_name: &str) -> Result<Verdict, CheckError> {
    let pools: Vec<PoolRecord> = serde_json::from_value(payload)
        .map_err(|source| CheckError::Shape { check: "zpool", source })?;
    Ok(evaluate(&pools, pool_name))
}

/// Classify the pool list. `pool_name` is either the all-pools sentinel
/// (any case) or an exact, case-sensitive pool name.
pub fn evaluate(pools: &[PoolRecord], pool_name: &str) -> Verdict {
    let all_pools = pool_name.eq_ignore_ascii_case(ALL_POOLS);

    let mut critical = Vec::new();
    let mut examined = Vec::new();
    let mut all_names = Vec::new();

    for pool in pools {
        all_names.push(pool.name.as_str());
        if all_pools || pool.name == pool_name {
            examined.push(pool.name.as_str());
            if pool.status != "ONLINE" {
                critical.push(format!("(C) ZPool {} is {}", pool.name, pool.status));
                // Keep scanning — every faulted pool is reported, not just the first.
            }
        }
    }

    if !all_pools && examined.is_empty() {
        return Verdict::critical(format!(
            "No Zpools found matching {pool_name} out of {} pools ({})",
            pools.len(),
            all_names.join(" ")
        ));
    }

    if !critical.is_empty() {
        return Verdict::critical(critical.join(" - "));
    }

    let examined_list = if examined.is_empty() {
        "(None - No Zpools found)".to_string()
    } else {
        examined.join(" ")
    };
    Verdict::ok(format!("No problem Zpools. Zpools examined: {examined_list}"))
}
