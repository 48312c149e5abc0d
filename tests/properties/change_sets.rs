//! Property tests for watch snapshots.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use zipbundler::application::watch::{ChangeSet, Snapshot};

fn snapshot() -> impl Strategy<Value = Snapshot> {
    proptest::collection::btree_map(
        "[a-e]{1,3}".prop_map(|s| PathBuf::from(format!("/src/{}.py", s))),
        (0u64..1_000).prop_map(|secs| SystemTime::UNIX_EPOCH + Duration::from_secs(secs)),
        0..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a snapshot compared with itself has no changes.
    #[test]
    fn property_identical_snapshots_are_unchanged(snap in snapshot()) {
        prop_assert!(ChangeSet::between(&snap, &snap).is_empty());
    }

    /// PROPERTY: every path in either snapshot is classified at most once,
    /// and the added and removed sets match the key differences.
    #[test]
    fn property_changes_partition_paths(old in snapshot(), new in snapshot()) {
        let changes = ChangeSet::between(&old, &new);

        for path in &changes.added {
            prop_assert!(!old.contains_key(path) && new.contains_key(path));
        }
        for path in &changes.removed {
            prop_assert!(old.contains_key(path) && !new.contains_key(path));
        }
        for path in &changes.modified {
            prop_assert!(new[path] > old[path]);
        }

        let expected_added = new.keys().filter(|p| !old.contains_key(*p)).count();
        let expected_removed = old.keys().filter(|p| !new.contains_key(*p)).count();
        prop_assert_eq!(changes.added.len(), expected_added);
        prop_assert_eq!(changes.removed.len(), expected_removed);
    }
}
