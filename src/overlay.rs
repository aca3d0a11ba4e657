use std::collections::HashSet;

use crate::foundation::core::{Point, Rect, RelPoint, Rgba8, Viewport};
use crate::foundation::error::GlanceResult;
use crate::label::model::{Label, LabelKind};
use crate::render::DrawSurface;

pub mod bounding_box;
pub mod keypoint;
pub mod mask;
pub mod polyline;

pub use bounding_box::BoundingBoxOverlay;
pub use keypoint::KeypointOverlay;
pub use mask::MaskOverlay;
pub use polyline::PolylineOverlay;

/// Fill translucency for a selected overlay.
pub const SELECTED_FILL_ALPHA: f32 = 0.7;
/// Fill translucency for an unselected overlay.
pub const UNSELECTED_FILL_ALPHA: f32 = 0.4;
/// Color of the dashed highlight pass drawn beneath a selected overlay.
pub const HIGHLIGHT_COLOR: Rgba8 = Rgba8::WHITE;
/// Dash pattern of the selected-highlight pass, in pixels.
pub const HIGHLIGHT_DASH: [f64; 2] = [6.0, 3.0];

/// Result of classifying a pointer position against an overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    /// The pointer is outside the overlay, or the variant cannot test
    /// containment (an open polyline, for example).
    None,
    /// The pointer lies on the overlay's stroked border.
    Border,
    /// The pointer lies inside the overlay's interior.
    Content,
}

/// External color resolution: given a field and label id, the color used for
/// stroking and filling that label.
pub trait ColorSource {
    /// Resolve the color for one label of one field.
    fn color_for(&self, field: &str, label_id: &str) -> Rgba8;
}

/// A plain color is a color source that paints everything the same.
impl ColorSource for Rgba8 {
    fn color_for(&self, _field: &str, _label_id: &str) -> Rgba8 {
        *self
    }
}

/// Immutable per-render-pass snapshot supplied to every overlay call.
///
/// Overlays hold only their field and label; everything else — where the
/// pointer is, how large the canvas is, what is selected — arrives through
/// this snapshot, so overlay behavior is a pure function of
/// `(label, RenderState)`.
pub struct RenderState<'a> {
    /// Pointer position in pixel space, if a pointer is over the canvas.
    pub pointer: Option<Point>,
    /// Normalized-to-pixel coordinate transform for this pass.
    pub viewport: Viewport,
    /// Stroke width in pixels; doubles as the border hit tolerance.
    pub stroke_width: f64,
    /// Ids of currently selected labels.
    pub selected: &'a HashSet<String>,
    /// External color resolution.
    pub colors: &'a dyn ColorSource,
}

impl RenderState<'_> {
    /// Whether the label id is in the current selection set.
    pub fn is_selected(&self, label_id: &str) -> bool {
        self.selected.contains(label_id)
    }
}

/// Descriptor for info/tooltip display of one overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct PointInfo {
    /// Field the overlay renders.
    pub field: String,
    /// Stable label identifier.
    pub label_id: String,
    /// Variant tag.
    pub kind: LabelKind,
    /// Resolved display color.
    pub color: Rgba8,
}

/// A renderable, hit-testable wrapper around one label's geometry.
///
/// All operations are pure functions of the overlay's label and the supplied
/// [`RenderState`]; none of them mutate the overlay or block.
pub trait Overlay {
    /// Classify the pointer in `state` against this overlay's geometry.
    fn contains(&self, state: &RenderState<'_>) -> Containment;

    /// Issue drawing commands for this overlay to `surface`.
    ///
    /// Surface command failures are not handled here; they propagate to the
    /// render-loop owner.
    fn draw(&self, surface: &mut dyn DrawSurface, state: &RenderState<'_>) -> GlanceResult<()>;

    /// Pixel distance from the pointer in `state` to the nearest feature of
    /// this overlay, used to rank overlays for hover and selection.
    ///
    /// Returns `f64::INFINITY` when no finite distance exists — no pointer,
    /// or no valid geometry — marking the overlay as not selectable.
    fn mouse_distance(&self, state: &RenderState<'_>) -> f64;

    /// Tooltip descriptor for this overlay.
    fn point_info(&self, state: &RenderState<'_>) -> PointInfo;

    /// Flattened normalized point list across all sub-geometries.
    fn points(&self) -> Vec<RelPoint>;
}

/// Overlay over one concrete label variant, dispatched by tag.
#[derive(Clone, Debug)]
pub enum LabelOverlay {
    /// Polyline overlay.
    Polyline(PolylineOverlay),
    /// Bounding-box overlay.
    BoundingBox(BoundingBoxOverlay),
    /// Keypoint overlay.
    Keypoints(KeypointOverlay),
    /// Mask overlay.
    Mask(MaskOverlay),
}

impl LabelOverlay {
    /// Wrap a label of `field` in its variant's overlay.
    pub fn new(field: impl Into<String>, label: Label) -> Self {
        let field = field.into();
        match label {
            Label::Polyline(l) => Self::Polyline(PolylineOverlay::new(field, l)),
            Label::BoundingBox(l) => Self::BoundingBox(BoundingBoxOverlay::new(field, l)),
            Label::Keypoints(l) => Self::Keypoints(KeypointOverlay::new(field, l)),
            Label::Mask(l) => Self::Mask(MaskOverlay::new(field, l)),
        }
    }

    /// Field this overlay renders.
    pub fn field(&self) -> &str {
        match self {
            Self::Polyline(o) => o.field(),
            Self::BoundingBox(o) => o.field(),
            Self::Keypoints(o) => o.field(),
            Self::Mask(o) => o.field(),
        }
    }

    /// Stable id of the wrapped label.
    pub fn label_id(&self) -> &str {
        match self {
            Self::Polyline(o) => o.label_id(),
            Self::BoundingBox(o) => o.label_id(),
            Self::Keypoints(o) => o.label_id(),
            Self::Mask(o) => o.label_id(),
        }
    }
}

impl Overlay for LabelOverlay {
    fn contains(&self, state: &RenderState<'_>) -> Containment {
        match self {
            Self::Polyline(o) => o.contains(state),
            Self::BoundingBox(o) => o.contains(state),
            Self::Keypoints(o) => o.contains(state),
            Self::Mask(o) => o.contains(state),
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, state: &RenderState<'_>) -> GlanceResult<()> {
        match self {
            Self::Polyline(o) => o.draw(surface, state),
            Self::BoundingBox(o) => o.draw(surface, state),
            Self::Keypoints(o) => o.draw(surface, state),
            Self::Mask(o) => o.draw(surface, state),
        }
    }

    fn mouse_distance(&self, state: &RenderState<'_>) -> f64 {
        match self {
            Self::Polyline(o) => o.mouse_distance(state),
            Self::BoundingBox(o) => o.mouse_distance(state),
            Self::Keypoints(o) => o.mouse_distance(state),
            Self::Mask(o) => o.mouse_distance(state),
        }
    }

    fn point_info(&self, state: &RenderState<'_>) -> PointInfo {
        match self {
            Self::Polyline(o) => o.point_info(state),
            Self::BoundingBox(o) => o.point_info(state),
            Self::Keypoints(o) => o.point_info(state),
            Self::Mask(o) => o.point_info(state),
        }
    }

    fn points(&self) -> Vec<RelPoint> {
        match self {
            Self::Polyline(o) => o.points(),
            Self::BoundingBox(o) => o.points(),
            Self::Keypoints(o) => o.points(),
            Self::Mask(o) => o.points(),
        }
    }
}

/// Normalized bounding region across many overlays, or `None` when no
/// overlay contributes any points.
pub fn overlay_bounds(overlays: &[LabelOverlay]) -> Option<Rect> {
    let mut bounds: Option<Rect> = None;
    for overlay in overlays {
        for p in overlay.points() {
            let r = Rect::new(p.x, p.y, p.x, p.y);
            bounds = Some(match bounds {
                Some(b) => b.union(r),
                None => r,
            });
        }
    }
    bounds
}
