use super::*;

fn state(items: &[&str]) -> OrderState {
    OrderState::from_order_by(items).expect("valid order")
}

#[test]
fn toggle_field_appends_absent_key_descending() {
    let next = state(&["id"]).with_field_toggled("created");
    assert_eq!(
        next.entries().last(),
        Some(&OrderEntry::new("created", NEW_ENTRY_ASCENDING))
    );
    assert_eq!(next.to_order_by_list(), vec!["id", "-created"]);
}

#[test]
fn toggle_field_twice_restores_original() {
    let original = state(&["created", "-id"]);
    for key in ["name", "id"] {
        assert_eq!(original.with_field_toggled(key).with_field_toggled(key), original);
    }
}

#[test]
fn toggle_field_removes_present_key_and_keeps_order() {
    let next = state(&["-id", "created", "-name"]).with_field_toggled("created");
    assert_eq!(next.to_order_by_list(), vec!["-id", "-name"]);
    assert!(!next.contains("created"));
}

#[test]
fn toggle_direction_flips_only_target() {
    let original = state(&["-id", "created", "-name"]);
    let next = original.with_direction_toggled("created");
    assert_eq!(next.to_order_by_list(), vec!["-id", "-created", "-name"]);
    for (before, after) in original.entries().iter().zip(next.entries()) {
        assert_eq!(before.key, after.key);
        if before.key != "created" {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn toggle_direction_on_unknown_key_is_noop() {
    let original = state(&["-id"]);
    assert_eq!(original.with_direction_toggled("created"), original);
}

#[test]
fn field_index_tracks_positions_of_present_keys_only() {
    let index = state(&["-id", "created"]).to_field_index();
    assert_eq!(index.len(), 2);
    assert_eq!(
        index.get("id"),
        Some(&FieldPosition {
            index: 0,
            ascending: false
        })
    );
    assert_eq!(
        index.get("created"),
        Some(&FieldPosition {
            index: 1,
            ascending: true
        })
    );
    assert!(!index.contains_key("name"));
}

#[test]
fn empty_state_projects_to_empty_views() {
    let empty = OrderState::new();
    assert!(empty.to_order_by_list().is_empty());
    assert!(empty.to_field_index().is_empty());
}

#[test]
fn parses_order_by_and_rejects_duplicate_keys() {
    let parsed = state(&["-id", "created"]);
    assert_eq!(
        parsed.entries(),
        &[OrderEntry::descending("id"), OrderEntry::ascending("created")]
    );

    assert_eq!(
        OrderState::from_order_by(["id", "-id"]),
        Err(OrderError::DuplicateKey("id".into()))
    );
}

#[test]
fn toggled_states_read_back_from_json_and_order_by() {
    let toggled = OrderState::new()
        .with_field_toggled("")
        .with_field_toggled("created")
        .with_direction_toggled("created")
        .with_field_toggled(" name ");
    assert_eq!(toggled.to_order_by_list(), vec!["-", "created", "- name "]);

    let json = serde_json::to_string(&toggled).expect("encode");
    let from_json: OrderState = serde_json::from_str(&json).expect("decode");
    assert_eq!(from_json, toggled);

    let from_order_by = OrderState::from_order_by(toggled.to_order_by_list()).expect("parse");
    assert_eq!(from_order_by, toggled);
}

#[test]
fn prefixed_keys_in_order_by_form() {
    let descending = OrderState::new().with_field_toggled("-x");
    let parsed = OrderState::from_order_by(descending.to_order_by_list()).expect("parse");
    assert_eq!(parsed, descending);

    let ascending = descending.with_direction_toggled("-x");
    let parsed = OrderState::from_order_by(ascending.to_order_by_list()).expect("parse");
    assert_eq!(parsed.entries(), &[OrderEntry::descending("x")]);
}

#[test]
fn deserializes_legacy_asc_field_and_validates() {
    let parsed: OrderState =
        serde_json::from_str(r#"[{"key":"id","asc":false},{"key":"created","ascending":true}]"#)
            .expect("order json");
    assert_eq!(parsed.to_order_by_list(), vec!["-id", "created"]);

    let duplicate = serde_json::from_str::<OrderState>(
        r#"[{"key":"id","asc":false},{"key":"id","asc":true}]"#,
    );
    assert!(duplicate.is_err());
}

#[test]
fn field_view_reflects_position() {
    let index = state(&["created"]).to_field_index();
    assert_eq!(
        FieldView::from(index.get("created")),
        FieldView::Active {
            rank: 0,
            ascending: true
        }
    );
    assert_eq!(FieldView::from(index.get("id")), FieldView::Inactive);
}
