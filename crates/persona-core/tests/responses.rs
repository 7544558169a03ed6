use persona_core::error::CoreError;
use persona_core::models::item::LikertScale;
use persona_core::models::response::{Response, ResponseSet};

#[test]
fn reanswering_replaces_value_in_place() {
    let mut set = ResponseSet::new();
    set.record("q1", 2);
    set.record("q2", 4);
    set.record("q1", 5);

    assert_eq!(set.len(), 2);
    assert_eq!(set.get("q1"), Some(5));
    assert_eq!(set.values(), vec![5, 4]);
}

#[test]
fn collecting_duplicates_keeps_last_write() {
    let set: ResponseSet = vec![
        Response::new("a", 1),
        Response::new("b", 3),
        Response::new("a", 4),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 2);
    assert_eq!(set.get("a"), Some(4));
}

#[test]
fn out_of_scale_value_is_rejected() {
    let mut set = ResponseSet::new();
    let err = set
        .record_on_scale("q1", 7, LikertScale::FIVE_POINT)
        .unwrap_err();

    assert!(matches!(err, CoreError::ValueOutOfScale { value: 7, .. }));
    assert!(set.is_empty());

    set.record_on_scale("q1", 5, LikertScale::FIVE_POINT).unwrap();
    assert_eq!(set.get("q1"), Some(5));
}

#[test]
fn remove_drops_answer() {
    let mut set = ResponseSet::new();
    set.record("q1", 3);
    assert_eq!(set.remove("q1"), Some(Response::new("q1", 3)));
    assert_eq!(set.remove("q1"), None);
}

#[test]
fn serializes_as_plain_list() {
    let mut set = ResponseSet::new();
    set.record("q1", 3);

    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"[{"item_id":"q1","value":3}]"#);

    let back: ResponseSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn scale_reverse_mirrors_endpoints() {
    let scale = LikertScale::FIVE_POINT;
    assert_eq!(scale.reverse(1), 5);
    assert_eq!(scale.reverse(5), 1);
    assert_eq!(scale.reverse(3), 3);
    assert!(scale.is_extreme(1));
    assert!(!scale.is_extreme(2));
}

#[test]
fn slice_view_follows_insertion_order() {
    let mut set = ResponseSet::new();
    set.record("q2", 1);
    set.record("q1", 3);

    let ids: Vec<&str> = set.as_slice().iter().map(|r| r.item_id.as_str()).collect();
    assert_eq!(ids, ["q2", "q1"]);
}

#[test]
fn reversing_far_off_scale_values_saturates() {
    let scale = LikertScale::FIVE_POINT;
    assert_eq!(scale.reverse(2), 4);
    assert_eq!(scale.reverse(i32::MIN), i32::MAX);
    assert_eq!(scale.reverse(i32::MAX), 6 - i32::MAX);
}
