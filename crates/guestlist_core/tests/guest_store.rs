use guestlist_core::{
    summarize, GuestPatch, GuestRecord, GuestStore, GuestSummary, GuestValidationError, NewGuest,
};
use std::collections::HashSet;

fn alice_and_bob() -> GuestStore {
    GuestStore::from_records(vec![
        GuestRecord::new(1, "Alice", "alice@email.com").unwrap(),
        GuestRecord::new(2, "Bob", "bob@email.com").unwrap(),
    ])
    .unwrap()
}

#[test]
fn add_assigns_unique_ids_and_appends_in_order() {
    let mut store = GuestStore::new();
    let names = ["Ann", "Ben", "Cid", "Dee", "Eve", "Fay"];
    for name in names {
        store.add(name, format!("{}@x.com", name.to_lowercase())).unwrap();
    }

    let snapshot = store.list();
    assert_eq!(snapshot.len(), names.len());
    let ids = snapshot.iter().map(|guest| guest.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), names.len());
    let listed = snapshot
        .iter()
        .map(|guest| guest.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(listed, names);
}

#[test]
fn add_starts_unconfirmed_without_rsvp_even_when_payload_sets_flags() {
    let mut store = GuestStore::new();
    let input = NewGuest {
        confirmed: true,
        rsvp: true,
        ..NewGuest::new("Carol", "carol@x.com")
    };

    let record = store.add_input(&input).unwrap();
    assert_eq!(record.id, 1);
    assert!(!record.confirmed);
    assert!(!record.rsvp);
    assert_eq!(store.get(1), Some(&record));
}

#[test]
fn add_with_blank_input_leaves_snapshot_unchanged() {
    let mut store = alice_and_bob();
    let before = store.list();

    let err = store.add("", "carol@x.com").unwrap_err();
    assert_eq!(err, GuestValidationError::EmptyName);
    let err = store.add("Carol", "   ").unwrap_err();
    assert_eq!(err, GuestValidationError::EmptyEmail);

    assert!(before.same_as(&store.list()));
    assert_eq!(store.revision(), 0);
}

#[test]
fn toggles_applied_twice_restore_original_flags() {
    let mut store = GuestStore::with_demo_guests();
    let original = store.get(2).unwrap().clone();

    assert_eq!(
        store.toggle_confirmed(2).unwrap().confirmed,
        !original.confirmed
    );
    assert_eq!(store.toggle_confirmed(2).unwrap().confirmed, original.confirmed);
    assert_eq!(store.toggle_rsvp(2).unwrap().rsvp, !original.rsvp);
    assert_eq!(store.toggle_rsvp(2).unwrap().rsvp, original.rsvp);

    assert_eq!(store.get(2), Some(&original));
    assert_eq!(store.revision(), 4);
}

#[test]
fn toggles_keep_position_and_other_fields() {
    let mut store = GuestStore::with_demo_guests();
    store.toggle_rsvp(1).unwrap();
    store.set_confirmed(1, true).unwrap();

    let snapshot = store.list();
    let first = &snapshot[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Alice");
    assert!(first.confirmed);
    assert!(first.rsvp);
    assert_eq!(snapshot[1].id, 2);
    assert_eq!(snapshot[2].id, 3);
}

#[test]
fn remove_deletes_record_and_repeat_is_noop() {
    let mut store = GuestStore::with_demo_guests();

    let removed = store.remove(2).unwrap();
    assert_eq!(removed.name, "Bob");
    let ids = store.list().iter().map(|guest| guest.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 3]);

    let after_first = store.list();
    let revision = store.revision();
    assert_eq!(store.remove(2), None);
    assert!(after_first.same_as(&store.list()));
    assert_eq!(store.revision(), revision);
}

#[test]
fn unknown_ids_are_noops_for_toggles_and_setters() {
    let mut store = GuestStore::with_demo_guests();
    let before = store.list();

    assert_eq!(store.toggle_confirmed(42), None);
    assert_eq!(store.toggle_rsvp(42), None);
    assert_eq!(store.set_confirmed(42, true), None);
    assert_eq!(store.set_rsvp(42, true), None);
    assert_eq!(store.edit(42, &GuestPatch::name("Nobody")), Ok(None));

    assert!(before.same_as(&store.list()));
    assert_eq!(store.revision(), 0);
}

#[test]
fn removing_highest_id_lets_next_add_reuse_it() {
    let mut store = alice_and_bob();

    store.remove(2).unwrap();
    let carol = store.add("Carol", "carol@x.com").unwrap();

    assert_eq!(carol.id, 2);
}

#[test]
fn removing_lower_id_does_not_fill_the_gap() {
    let mut store = GuestStore::with_demo_guests();

    store.remove(1).unwrap();
    let dana = store.add("Dana", "dana@x.com").unwrap();

    assert_eq!(dana.id, 4);
}

#[test]
fn edit_with_blank_name_fails_and_keeps_record() {
    let mut store = alice_and_bob();
    let before = store.list();

    let err = store.edit(1, &GuestPatch::name("  ")).unwrap_err();
    assert_eq!(err, GuestValidationError::EmptyName);
    assert_eq!(store.get(1).unwrap().name, "Alice");
    assert!(before.same_as(&store.list()));
}

#[test]
fn edit_with_one_blank_field_applies_nothing() {
    let mut store = alice_and_bob();
    let patch = GuestPatch {
        name: Some("Alicia".to_string()),
        email: Some("\t".to_string()),
    };

    let err = store.edit(1, &patch).unwrap_err();
    assert_eq!(err, GuestValidationError::EmptyEmail);
    assert_eq!(store.get(1).unwrap().name, "Alice");
}

#[test]
fn edit_replaces_text_and_keeps_flags() {
    let mut store = GuestStore::with_demo_guests();
    let patch = GuestPatch {
        name: Some(" Charles ".to_string()),
        email: Some("charles@email.com".to_string()),
    };

    let updated = store.edit(3, &patch).unwrap().unwrap();
    assert_eq!(updated.name, "Charles");
    assert_eq!(updated.email, "charles@email.com");
    assert!(updated.confirmed);
    assert!(updated.rsvp);
    assert_eq!(store.list()[2], updated);
}

#[test]
fn every_snapshot_summary_is_consistent() {
    let mut store = GuestStore::with_demo_guests();
    let mut snapshots = vec![store.list()];

    store.add("Dana", "dana@x.com").unwrap();
    snapshots.push(store.list());
    store.toggle_confirmed(4).unwrap();
    snapshots.push(store.list());
    store.toggle_rsvp(1).unwrap();
    snapshots.push(store.list());
    store.remove(3).unwrap();
    snapshots.push(store.list());
    store.remove(1).unwrap();
    store.remove(2).unwrap();
    store.remove(4).unwrap();
    snapshots.push(store.list());

    for snapshot in &snapshots {
        let summary = summarize(snapshot);
        assert_eq!(summary.total, snapshot.len());
        assert_eq!(summary.confirmed_count + summary.unconfirmed_count, summary.total);
        assert_eq!(summary.rsvp_count + summary.not_rsvp_count, summary.total);
    }
}

#[test]
fn empty_store_summary_is_all_zero() {
    let store = GuestStore::new();
    assert!(store.is_empty());
    assert_eq!(
        store.summary(),
        GuestSummary {
            total: 0,
            confirmed_count: 0,
            unconfirmed_count: 0,
            rsvp_count: 0,
            not_rsvp_count: 0,
        }
    );
}

#[test]
fn effective_mutations_publish_new_snapshots() {
    let mut store = GuestStore::with_demo_guests();
    let mut previous = store.list();

    store.add("Dana", "dana@x.com").unwrap();
    assert!(!previous.same_as(&store.list()));
    previous = store.list();

    store.edit(4, &GuestPatch::email("dana@y.com")).unwrap();
    assert!(!previous.same_as(&store.list()));
    previous = store.list();

    store.remove(4).unwrap();
    assert!(!previous.same_as(&store.list()));
    assert_eq!(store.revision(), 3);
}

#[test]
fn add_after_max_id_fails_without_mutation() {
    let mut store =
        GuestStore::from_records(vec![GuestRecord::new(u64::MAX, "Zed", "z@x.com").unwrap()])
            .unwrap();
    let before = store.list();

    let err = store.add("Carol", "carol@x.com").unwrap_err();
    assert_eq!(err, GuestValidationError::IdSpaceExhausted);
    let err = store.add_input(&NewGuest::new("Dana", "dana@x.com")).unwrap_err();
    assert_eq!(err, GuestValidationError::IdSpaceExhausted);

    assert!(before.same_as(&store.list()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.revision(), 0);
}

#[test]
fn deserialized_max_id_record_blocks_add_but_not_other_ops() {
    let value = serde_json::json!([
        { "id": 1, "name": "Alice", "email": "alice@email.com" },
        { "id": u64::MAX, "name": "Zed", "email": "z@x.com" }
    ]);
    let records: Vec<GuestRecord> = serde_json::from_value(value).unwrap();
    let mut store = GuestStore::from_records(records).unwrap();

    assert_eq!(
        store.add("Carol", "carol@x.com"),
        Err(GuestValidationError::IdSpaceExhausted)
    );
    assert!(store.toggle_rsvp(u64::MAX).unwrap().rsvp);

    store.remove(u64::MAX).unwrap();
    assert_eq!(store.add("Carol", "carol@x.com").unwrap().id, 2);
}
