// SPDX-License-Identifier: MIT
//! Property-based tests for alert classification.
//!
//! 1. Any sequence containing a counted CRITICAL alert classifies CRITICAL,
//!    no matter how many warnings surround it.
//! 2. Dismissed-only sequences are OK when dismissed alerts are ignored.
//!
//! Run with: cargo test --test proptest_alerts

use proptest::prelude::*;

use check_truenas::checks::alerts::{evaluate, AlertRecord};
use check_truenas::verdict::Severity;

fn record(level: &str, dismissed: bool, formatted: String) -> AlertRecord {
    AlertRecord {
        level: level.to_string(),
        dismissed,
        formatted,
    }
}

fn arb_level() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("CRITICAL"),
        Just("WARNING"),
        Just("INFO"),
        Just("NOTICE"),
    ]
}

fn arb_records(max: usize) -> impl Strategy<Value = Vec<AlertRecord>> {
    prop::collection::vec(
        (arb_level(), any::<bool>(), "[a-z ]{0,40}"),
        0..max,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(level, dismissed, text)| record(level, dismissed, text))
            .collect()
    })
}

proptest! {
    /// A non-dismissed CRITICAL anywhere in the sequence forces CRITICAL,
    /// regardless of warning count or position.
    #[test]
    fn critical_dominates_any_sequence(
        mut records in arb_records(16),
        insert_at in 0_usize..17,
    ) {
        let position = insert_at.min(records.len());
        records.insert(position, record("CRITICAL", false, "injected".into()));

        let verdict = evaluate(&records, true);
        prop_assert_eq!(verdict.severity, Severity::Critical);
    }

    /// With ignore_dismissed off, even a dismissed CRITICAL still counts.
    #[test]
    fn dismissed_critical_counts_when_not_ignoring(
        mut records in arb_records(16),
    ) {
        records.push(record("CRITICAL", true, "dismissed but real".into()));

        let verdict = evaluate(&records, false);
        prop_assert_eq!(verdict.severity, Severity::Critical);
    }

    /// A sequence whose problem alerts are all dismissed is OK when dismissed
    /// alerts are ignored — never WARNING, never a crash.
    #[test]
    fn quiet_sequences_are_ok(
        records in arb_records(16),
    ) {
        let quiet: Vec<AlertRecord> = records
            .into_iter()
            .map(|mut r| {
                if r.level == "CRITICAL" || r.level == "WARNING" {
                    r.dismissed = true;
                }
                r
            })
            .collect();

        let verdict = evaluate(&quiet, true);
        prop_assert_eq!(verdict.severity, Severity::Ok);
    }
}
