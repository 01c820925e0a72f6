//! Unit tests for the History Manager.
//!
//! Tests recording, most-recent-first listing, the 50-entry cap,
//! deletion, and clearing.

use passforge::database::Database;
use passforge::managers::history_manager::{
    HistoryManager, HistoryManagerTrait, MAX_HISTORY_ENTRIES,
};
use passforge::types::history::GenerationSnapshot;
use passforge::types::strength::StrengthTier;

fn snapshot() -> GenerationSnapshot {
    GenerationSnapshot {
        length: 16,
        lowercase: true,
        uppercase: true,
        digits: true,
        symbols: true,
        exclude_similar: false,
    }
}

// ─── Record / List ───

#[test]
fn test_record_returns_unique_ids() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    let first = manager
        .record("Abc123!@", &snapshot(), Some(StrengthTier::Medium))
        .unwrap();
    let second = manager
        .record("Xyz789$%", &snapshot(), Some(StrengthTier::Medium))
        .unwrap();

    assert!(!first.is_empty());
    assert_ne!(first, second);
}

#[test]
fn test_list_returns_most_recent_first() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    manager.record("first", &snapshot(), None).unwrap();
    manager.record("second", &snapshot(), None).unwrap();
    manager.record("third", &snapshot(), None).unwrap();

    let entries = manager.list().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].password, "third");
    assert_eq!(entries[1].password, "second");
    assert_eq!(entries[2].password, "first");
}

#[test]
fn test_list_preserves_snapshot_and_tier() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    let stored = GenerationSnapshot {
        length: 24,
        lowercase: true,
        uppercase: false,
        digits: true,
        symbols: false,
        exclude_similar: true,
    };
    manager
        .record("abc234", &stored, Some(StrengthTier::Weak))
        .unwrap();

    let entries = manager.list().unwrap();
    assert_eq!(entries[0].snapshot, stored);
    assert_eq!(entries[0].tier, Some(StrengthTier::Weak));
}

#[test]
fn test_unrated_entry_round_trips_as_none() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    manager.record("abc", &snapshot(), None).unwrap();
    assert_eq!(manager.list().unwrap()[0].tier, None);
}

// ─── Bounded cap ───

#[test]
fn test_cap_evicts_oldest_entries() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    for i in 0..MAX_HISTORY_ENTRIES + 5 {
        manager
            .record(&format!("password-{}", i), &snapshot(), None)
            .unwrap();
    }

    let entries = manager.list().unwrap();
    assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);

    // The newest survives, the five oldest are gone
    assert_eq!(entries[0].password, format!("password-{}", MAX_HISTORY_ENTRIES + 4));
    assert!(entries.iter().all(|e| e.password != "password-0"));
    assert!(entries.iter().all(|e| e.password != "password-4"));
    assert!(entries.iter().any(|e| e.password == "password-5"));
}

#[test]
fn test_count_tracks_inserts() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    assert_eq!(manager.count().unwrap(), 0);
    manager.record("one", &snapshot(), None).unwrap();
    manager.record("two", &snapshot(), None).unwrap();
    assert_eq!(manager.count().unwrap(), 2);
}

// ─── Delete / Clear ───

#[test]
fn test_delete_entry() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    let id = manager.record("doomed", &snapshot(), None).unwrap();
    manager.record("kept", &snapshot(), None).unwrap();

    manager.delete_entry(&id).unwrap();

    let entries = manager.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].password, "kept");
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    let result = manager.delete_entry("no-such-id");
    assert!(matches!(
        result,
        Err(passforge::types::errors::HistoryError::NotFound(_))
    ));
}

#[test]
fn test_clear_all() {
    let db = Database::open_in_memory().unwrap();
    let mut manager = HistoryManager::new(db.connection());

    for i in 0..10 {
        manager
            .record(&format!("password-{}", i), &snapshot(), None)
            .unwrap();
    }
    manager.clear_all().unwrap();

    assert_eq!(manager.count().unwrap(), 0);
    assert!(manager.list().unwrap().is_empty());
}
