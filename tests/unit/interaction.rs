use std::collections::HashSet;

use super::*;
use crate::foundation::core::{Canvas, Point, RelPoint, Rgba8, Viewport};
use crate::label::model::{Label, PolylineLabel};

const GRAY: Rgba8 = Rgba8 {
    r: 128,
    g: 128,
    b: 128,
    a: 255,
};

fn state<'a>(
    pointer: (f64, f64),
    selected: &'a HashSet<String>,
) -> RenderState<'a> {
    RenderState {
        pointer: Some(Point::new(pointer.0, pointer.1)),
        viewport: Viewport::identity(Canvas {
            width: 100,
            height: 100,
        }),
        stroke_width: 2.0,
        selected,
        colors: &GRAY,
    }
}

fn horizontal_line(id: &str, y: f64) -> LabelOverlay {
    LabelOverlay::new(
        "lines",
        Label::Polyline(PolylineLabel {
            id: id.into(),
            points: vec![vec![RelPoint::new(0.0, y), RelPoint::new(1.0, y)]],
            closed: false,
            filled: false,
        }),
    )
}

fn degenerate(id: &str) -> LabelOverlay {
    LabelOverlay::new(
        "lines",
        Label::Polyline(PolylineLabel {
            id: id.into(),
            points: vec![vec![RelPoint::new(0.5, 0.5)]],
            closed: false,
            filled: false,
        }),
    )
}

#[test]
fn nearest_overlay_wins() {
    let selected = HashSet::new();
    let overlays = vec![horizontal_line("far", 0.0), horizontal_line("near", 0.4)];
    let hit = resolve_hover(&overlays, &state((50.0, 45.0), &selected), 20.0).unwrap();
    assert_eq!(hit.index, 1);
    assert_eq!(hit.distance_px, 5.0);
}

#[test]
fn overlays_beyond_the_threshold_are_ignored() {
    let selected = HashSet::new();
    let overlays = vec![horizontal_line("a", 0.0)];
    let s = state((50.0, 45.0), &selected);
    assert!(resolve_hover(&overlays, &s, 20.0).is_none());
    assert!(resolve_hover(&overlays, &s, 45.0).is_some());
}

#[test]
fn equal_distances_go_to_the_topmost_overlay() {
    let selected = HashSet::new();
    // Same geometry: both are exactly 5px from the pointer; the later one
    // is rendered on top and must win.
    let overlays = vec![horizontal_line("under", 0.4), horizontal_line("over", 0.4)];
    let hit = resolve_hover(&overlays, &state((50.0, 45.0), &selected), 20.0).unwrap();
    assert_eq!(hit.index, 1);
}

#[test]
fn non_selectable_overlays_never_win() {
    let selected = HashSet::new();
    let overlays = vec![degenerate("d")];
    assert!(resolve_hover(&overlays, &state((50.0, 50.0), &selected), f64::MAX).is_none());
}

#[test]
fn no_pointer_resolves_to_nothing() {
    let selected = HashSet::new();
    let overlays = vec![horizontal_line("a", 0.5)];
    let s = RenderState {
        pointer: None,
        viewport: Viewport::identity(Canvas {
            width: 100,
            height: 100,
        }),
        stroke_width: 2.0,
        selected: &selected,
        colors: &GRAY,
    };
    assert!(resolve_hover(&overlays, &s, 20.0).is_none());
}

#[test]
fn resolution_is_deterministic() {
    let selected = HashSet::new();
    let overlays = vec![horizontal_line("a", 0.1), horizontal_line("b", 0.6)];
    let s = state((30.0, 40.0), &selected);
    assert_eq!(
        resolve_hover(&overlays, &s, 50.0),
        resolve_hover(&overlays, &s, 50.0)
    );
}
