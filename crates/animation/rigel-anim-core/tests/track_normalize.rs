use rigel_anim_core::{normalize_track, Diagnostics, TargetTrack};
use serde_json::{json, Value as JsonValue};

fn times(track: &TargetTrack) -> Vec<f64> {
    track
        .keyframes()
        .expect("map-form track normalizes to keyframes")
        .iter()
        .map(|k| k.time)
        .collect()
}

#[test]
fn list_form_tracks_pass_through_unchanged() {
    let inputs = [
        json!([]),
        json!([{ "time": 0.0, "value": [1, 2, 3] }]),
        // Unusual entries are not validated.
        json!([1, "two", null, { "time": "later" }]),
    ];
    for input in inputs {
        let mut diag = Diagnostics::new();
        let out = normalize_track(&input, "ctx", &mut diag);
        assert!(matches!(out, TargetTrack::Passthrough(_)));
        assert_eq!(serde_json::to_value(&out).unwrap(), input);
        assert!(diag.is_empty());
    }
}

#[test]
fn map_form_tracks_sort_by_numeric_time() {
    let track = json!({
        "1.0": [0, 1, 0],
        "0": [0, 0, 0],
        "10": [0, 10, 0],
        "0.5": [0, 0.5, 0],
        "2": [0, 2, 0]
    });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "ctx", &mut diag);
    assert_eq!(times(&out), [0.0, 0.5, 1.0, 2.0, 10.0]);
    assert!(diag.is_empty());
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            { "time": 0.0, "value": [0, 0, 0] },
            { "time": 0.5, "value": [0, 0.5, 0] },
            { "time": 1.0, "value": [0, 1, 0] },
            { "time": 2.0, "value": [0, 2, 0] },
            { "time": 10.0, "value": [0, 10, 0] }
        ])
    );
}

#[test]
fn equal_times_keep_source_order() {
    let track = json!({
        "0.0": ["a", 0, 0],
        "1": ["c", 0, 0],
        "0": ["b", 0, 0]
    });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "ctx", &mut diag);
    let tags: Vec<JsonValue> = out
        .keyframes()
        .unwrap()
        .iter()
        .map(|k| k.value[0].clone())
        .collect();
    assert_eq!(tags, [json!("a"), json!("b"), json!("c")]);
}

#[test]
fn signed_zero_times_tie_in_source_order() {
    let track = json!({
        "0": ["first", 0, 0],
        "-0": ["second", 0, 0],
        "-0.5": ["earliest", 0, 0]
    });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "ctx", &mut diag);
    let tags: Vec<JsonValue> = out
        .keyframes()
        .unwrap()
        .iter()
        .map(|k| k.value[0].clone())
        .collect();
    assert_eq!(tags, [json!("earliest"), json!("first"), json!("second")]);
}

#[test]
fn only_first_three_components_are_kept() {
    let track = json!({ "0": [0.0, 0.0, 0.0, 1.0], "1": [1, 2, 3, 4, 5] });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "ctx", &mut diag);
    assert_eq!(
        serde_json::to_value(&out).unwrap(),
        json!([
            { "time": 0.0, "value": [0.0, 0.0, 0.0] },
            { "time": 1.0, "value": [1, 2, 3] }
        ])
    );
}

#[test]
fn short_value_is_dropped_with_diagnostic() {
    let track = json!({ "0": [1, 2] });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "hip.json:run:hip:position", &mut diag);
    assert!(out.is_empty());
    assert_eq!(diag.len(), 1);
    assert_eq!(
        diag.warnings()[0].message,
        "Skipping invalid value in hip.json:run:hip:position at time 0"
    );
}

#[test]
fn invalid_value_message_uses_raw_time_key() {
    let track = json!({ " 0.50 ": "up", "0.25": { "x": 1 } });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "ctx", &mut diag);
    assert!(out.is_empty());
    assert!(diag.contains("Skipping invalid value in ctx at time  0.50 "));
    assert!(diag.contains("Skipping invalid value in ctx at time 0.25"));
}

#[test]
fn unparseable_time_is_dropped_with_time_context() {
    let track = json!({ "start": [0, 0, 0], "1": [1, 1, 1] });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "f:a:b:scale", &mut diag);
    assert_eq!(times(&out), [1.0]);
    assert_eq!(
        diag.warnings()[0].message,
        "Skipping invalid float 'start' in f:a:b:scale time"
    );
}

#[test]
fn non_container_track_is_empty_with_diagnostic() {
    for bad in [json!("bad"), json!(3), json!(null), json!(true)] {
        let mut diag = Diagnostics::new();
        let out = normalize_track(&bad, "f:a:b:rotation", &mut diag);
        assert!(out.is_empty());
        assert_eq!(diag.warnings()[0].message, "Skipping invalid track 'f:a:b:rotation'");
    }
}

#[test]
fn map_form_output_never_grows_and_is_sorted() {
    let track = json!({
        "3": [3, 3, 3],
        "x": [0, 0, 0],
        "-1": [9, 9, 9],
        "2": [2, 2],
        "0.125": [1, 1, 1],
        "nan": [0, 0, 0]
    });
    let mut diag = Diagnostics::new();
    let out = normalize_track(&track, "ctx", &mut diag);
    let input_len = track.as_object().unwrap().len();
    assert!(out.len() <= input_len);
    let ts = times(&out);
    assert!(ts.windows(2).all(|w| w[0] <= w[1]), "unsorted: {ts:?}");
    assert_eq!(ts, [-1.0, 0.125, 3.0]);
    assert_eq!(diag.len(), 3);
}
