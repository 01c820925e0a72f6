//! Property-based tests for History Manager operations.
//!
//! These tests verify that recording a password then listing always
//! surfaces the new entry first with its snapshot intact, and that the
//! bounded cap holds for arbitrary insert counts.

use proptest::prelude::*;

use passforge::database::Database;
use passforge::managers::history_manager::{
    HistoryManager, HistoryManagerTrait, MAX_HISTORY_ENTRIES,
};
use passforge::types::history::GenerationSnapshot;

/// Strategy for generating printable ASCII passwords.
fn arb_password() -> impl Strategy<Value = String> {
    "[!-~]{1,32}"
}

/// Strategy for generating snapshots with at least one class enabled.
fn arb_snapshot() -> impl Strategy<Value = GenerationSnapshot> {
    (
        4usize..=64,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_filter_map(
            "at least one class must be enabled",
            |(length, lower, upper, digits, symbols, exclude_similar)| {
                if !(lower || upper || digits || symbols) {
                    return None;
                }
                Some(GenerationSnapshot {
                    length,
                    lowercase: lower,
                    uppercase: upper,
                    digits,
                    symbols,
                    exclude_similar,
                })
            },
        )
}

// **Property 1: Record-then-list round trip**
//
// *For any* password and snapshot, recording then listing SHALL return
// the entry first, with the password and snapshot preserved.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn record_then_list_returns_entry_first(
        password in arb_password(),
        snapshot in arb_snapshot(),
    ) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut manager = HistoryManager::new(db.connection());

        let entry_id = manager
            .record(&password, &snapshot, None)
            .expect("record should succeed for valid inputs");

        let entries = manager.list().expect("list should succeed");
        prop_assert!(!entries.is_empty());
        prop_assert_eq!(&entries[0].id, &entry_id);
        prop_assert_eq!(&entries[0].password, &password);
        prop_assert_eq!(entries[0].snapshot, snapshot);
    }
}

// **Property 2: The history never exceeds its cap**
//
// *For any* number of recorded passwords, the stored count SHALL be at
// most `MAX_HISTORY_ENTRIES`, and when the cap is exceeded the newest
// entry survives.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn history_is_bounded(inserts in 1usize..=MAX_HISTORY_ENTRIES + 20) {
        let db = Database::open_in_memory()
            .expect("Failed to open in-memory database");
        let mut manager = HistoryManager::new(db.connection());

        let snapshot = GenerationSnapshot {
            length: 16,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
        };

        for i in 0..inserts {
            manager
                .record(&format!("password-{}", i), &snapshot, None)
                .expect("record should succeed");
        }

        let count = manager.count().expect("count should succeed");
        prop_assert_eq!(count, inserts.min(MAX_HISTORY_ENTRIES));

        let entries = manager.list().expect("list should succeed");
        prop_assert_eq!(&entries[0].password, &format!("password-{}", inserts - 1));
    }
}
