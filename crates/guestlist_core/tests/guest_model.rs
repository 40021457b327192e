use guestlist_core::{email_looks_valid, GuestRecord, GuestStore, GuestSummary};

#[test]
fn guest_serialization_uses_expected_wire_fields() {
    let mut guest = GuestRecord::new(3, "Charlie", "charlie@email.com").unwrap();
    guest.confirmed = true;

    let json = serde_json::to_value(&guest).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Charlie");
    assert_eq!(json["email"], "charlie@email.com");
    assert_eq!(json["confirmed"], true);
    assert_eq!(json["rsvp"], false);

    let decoded: GuestRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, guest);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": 1,
        "name": "   ",
        "email": "alice@email.com",
        "confirmed": false,
        "rsvp": false
    });

    let err = serde_json::from_value::<GuestRecord>(value).unwrap_err();
    assert!(
        err.to_string().contains("guest name must not be empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_trims_text_and_defaults_missing_flags() {
    let value = serde_json::json!({
        "id": 9,
        "name": " Dana ",
        "email": "dana@x.com "
    });

    let guest: GuestRecord = serde_json::from_value(value).unwrap();
    assert_eq!(guest.name, "Dana");
    assert_eq!(guest.email, "dana@x.com");
    assert!(!guest.confirmed);
    assert!(!guest.rsvp);
}

#[test]
fn summary_serializes_in_camel_case() {
    let summary = GuestStore::with_demo_guests().summary();
    let json = serde_json::to_value(summary).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "total": 3,
            "confirmedCount": 1,
            "unconfirmedCount": 2,
            "rsvpCount": 2,
            "notRsvpCount": 1
        })
    );
    let decoded: GuestSummary = serde_json::from_value(json).unwrap();
    assert!(decoded.is_consistent());
}

#[test]
fn email_hint_does_not_gate_store_writes() {
    let mut store = GuestStore::new();
    let guest = store.add("Eve", "not-an-email").unwrap();

    assert!(!guest.email_looks_valid());
    assert!(!email_looks_valid(&guest.email));
    assert_eq!(store.len(), 1);
}
