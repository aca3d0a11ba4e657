use super::*;
use crate::foundation::core::RelPoint;
use crate::label::model::{LabelKind, PolylineLabel};
use crate::overlay::Overlay;

#[test]
fn decodes_each_label_kind() {
    let value = serde_json::json!([
        {
            "kind": "polyline",
            "id": "p1",
            "points": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]],
            "closed": true,
            "filled": true
        },
        { "kind": "bounding_box", "id": "b1", "bounds": [0.1, 0.1, 0.5, 0.5] },
        { "kind": "keypoints", "id": "k1", "points": [[0.5, 0.5]] },
        { "kind": "mask", "id": "m1", "contours": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]] }
    ]);

    let overlays = decode_field_labels("ground_truth", &value).unwrap();
    assert_eq!(overlays.len(), 4);
    assert!(overlays.iter().all(|o| o.field() == "ground_truth"));
    assert_eq!(
        overlays.iter().map(LabelOverlay::label_id).collect::<Vec<_>>(),
        vec!["p1", "b1", "k1", "m1"]
    );
}

#[test]
fn decoded_polyline_keeps_its_geometry() {
    let value = serde_json::json!([
        {
            "kind": "polyline",
            "id": "p1",
            "points": [[[0.25, 0.5], [0.75, 0.5]]]
        }
    ]);
    let overlays = decode_field_labels("lines", &value).unwrap();
    assert_eq!(
        overlays[0].points(),
        vec![RelPoint::new(0.25, 0.5), RelPoint::new(0.75, 0.5)]
    );
}

#[test]
fn unknown_kind_fails_fast_naming_kind_and_field() {
    let value = serde_json::json!([{ "kind": "cuboid", "id": "c1" }]);
    let err = decode_field_labels("ground_truth", &value).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("cuboid"), "{msg}");
    assert!(msg.contains("ground_truth"), "{msg}");
}

#[test]
fn missing_kind_tag_is_an_error() {
    let value = serde_json::json!([{ "id": "x" }]);
    assert!(decode_field_labels("f", &value).is_err());
}

#[test]
fn malformed_geometry_is_an_error() {
    let value = serde_json::json!([
        { "kind": "bounding_box", "id": "b1", "bounds": [0.1, 0.1] }
    ]);
    assert!(decode_field_labels("f", &value).is_err());
}

#[test]
fn non_array_payload_is_an_error() {
    let value = serde_json::json!({ "kind": "polyline" });
    assert!(decode_field_labels("f", &value).is_err());
}

#[test]
fn label_serialization_roundtrips_through_the_wire_tag() {
    let label = Label::Polyline(PolylineLabel {
        id: "p1".into(),
        points: vec![vec![RelPoint::new(0.1, 0.2)]],
        closed: false,
        filled: false,
    });
    let value = serde_json::to_value(&label).unwrap();
    assert_eq!(value["kind"], "polyline");
    let back: Label = serde_json::from_value(value).unwrap();
    assert_eq!(back, label);
    assert_eq!(back.kind(), LabelKind::Polyline);
}
