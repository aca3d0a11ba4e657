use std::collections::HashSet;

use super::*;
use crate::foundation::core::{Canvas, Rgba8, Viewport};
use crate::render::record::{RecordingSurface, SurfaceCommand};

const AMBER: Rgba8 = Rgba8 {
    r: 255,
    g: 191,
    b: 0,
    a: 255,
};

fn state<'a>(
    pointer: Option<(f64, f64)>,
    selected: &'a HashSet<String>,
) -> RenderState<'a> {
    RenderState {
        pointer: pointer.map(|(x, y)| Point::new(x, y)),
        viewport: Viewport::identity(Canvas {
            width: 100,
            height: 100,
        }),
        stroke_width: 2.0,
        selected,
        colors: &AMBER,
    }
}

fn square() -> MaskOverlay {
    MaskOverlay::new(
        "segmentation",
        MaskLabel {
            id: "m1".into(),
            contours: vec![vec![
                RelPoint::new(0.2, 0.2),
                RelPoint::new(0.8, 0.2),
                RelPoint::new(0.8, 0.8),
                RelPoint::new(0.2, 0.8),
            ]],
        },
    )
}

#[test]
fn interior_counts_as_distance_zero() {
    let selected = HashSet::new();
    assert_eq!(square().mouse_distance(&state(Some((50.0, 50.0)), &selected)), 0.0);
}

#[test]
fn exterior_distance_is_to_the_boundary() {
    let selected = HashSet::new();
    assert_eq!(
        square().mouse_distance(&state(Some((90.0, 50.0)), &selected)),
        10.0
    );
}

#[test]
fn containment_classification() {
    let selected = HashSet::new();
    assert_eq!(
        square().contains(&state(Some((50.0, 50.0)), &selected)),
        Containment::Content
    );
    assert_eq!(
        square().contains(&state(Some((80.0, 50.0)), &selected)),
        Containment::Border
    );
    assert_eq!(
        square().contains(&state(Some((95.0, 50.0)), &selected)),
        Containment::None
    );
}

#[test]
fn draw_strokes_then_fills_each_contour() {
    let selected = HashSet::new();
    let s = state(None, &selected);
    let mut surface = RecordingSurface::new();
    square().draw(&mut surface, &s).unwrap();

    assert!(surface.commands.contains(&SurfaceCommand::Stroke));
    let fill_at = surface
        .commands
        .iter()
        .position(|c| *c == SurfaceCommand::Fill)
        .unwrap();
    assert_eq!(
        surface.commands[fill_at - 1],
        SurfaceCommand::SetGlobalAlpha(UNSELECTED_FILL_ALPHA)
    );
    assert_eq!(
        surface.commands[fill_at + 1],
        SurfaceCommand::SetGlobalAlpha(1.0)
    );
}

#[test]
fn degenerate_contours_draw_nothing_and_are_not_selectable() {
    let selected = HashSet::new();
    let overlay = MaskOverlay::new(
        "segmentation",
        MaskLabel {
            id: "m1".into(),
            contours: vec![vec![RelPoint::new(0.5, 0.5)]],
        },
    );

    let mut surface = RecordingSurface::new();
    overlay
        .draw(&mut surface, &state(None, &selected))
        .unwrap();
    assert!(surface.commands.is_empty());

    // Rings with fewer than 2 vertices contribute no boundary segments.
    assert_eq!(
        overlay.mouse_distance(&state(Some((50.0, 50.0)), &selected)),
        f64::INFINITY
    );
}
