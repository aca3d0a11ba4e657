use crate::foundation::core::{Point, RelPoint};
use crate::foundation::error::GlanceResult;
use crate::label::model::{KeypointLabel, LabelKind};
use crate::overlay::{
    Containment, HIGHLIGHT_COLOR, HIGHLIGHT_DASH, Overlay, PointInfo, RenderState,
};
use crate::render::DrawSurface;

/// Marker radius for a rendered keypoint, in pixels.
pub const KEYPOINT_RADIUS_PX: f64 = 6.0;

/// Overlay for keypoint-set labels.
///
/// Each point renders as a small filled diamond; the command set has no arc
/// primitive, so markers are built from line segments.
#[derive(Clone, Debug)]
pub struct KeypointOverlay {
    field: String,
    label: KeypointLabel,
}

impl KeypointOverlay {
    /// Wrap a keypoint label of `field`.
    pub fn new(field: impl Into<String>, label: KeypointLabel) -> Self {
        Self {
            field: field.into(),
            label,
        }
    }

    /// Field this overlay renders.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Stable id of the wrapped label.
    pub fn label_id(&self) -> &str {
        &self.label.id
    }
}

fn diamond(surface: &mut dyn DrawSurface, center: Point, r: f64) -> GlanceResult<()> {
    surface.begin_path()?;
    surface.move_to(Point::new(center.x, center.y - r))?;
    surface.line_to(Point::new(center.x + r, center.y))?;
    surface.line_to(Point::new(center.x, center.y + r))?;
    surface.line_to(Point::new(center.x - r, center.y))?;
    surface.close_path()?;
    Ok(())
}

impl Overlay for KeypointOverlay {
    fn contains(&self, state: &RenderState<'_>) -> Containment {
        if self.mouse_distance(state) <= KEYPOINT_RADIUS_PX {
            Containment::Content
        } else {
            Containment::None
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, state: &RenderState<'_>) -> GlanceResult<()> {
        let selected = state.is_selected(&self.label.id);
        let color = state.colors.color_for(&self.field, &self.label.id);

        for p in &self.label.points {
            let center = state.viewport.to_pixel(*p);
            diamond(surface, center, KEYPOINT_RADIUS_PX)?;
            if selected {
                surface.set_line_width(state.stroke_width)?;
                surface.set_line_dash(&HIGHLIGHT_DASH)?;
                surface.set_stroke_color(HIGHLIGHT_COLOR)?;
                surface.stroke()?;
                surface.set_line_dash(&[])?;
            }
            surface.set_fill_color(color)?;
            surface.fill()?;
        }
        Ok(())
    }

    fn mouse_distance(&self, state: &RenderState<'_>) -> f64 {
        let Some(pointer) = state.pointer else {
            return f64::INFINITY;
        };
        self.label
            .points
            .iter()
            .map(|p| pointer.distance(state.viewport.to_pixel(*p)))
            .fold(f64::INFINITY, f64::min)
    }

    fn point_info(&self, state: &RenderState<'_>) -> PointInfo {
        PointInfo {
            field: self.field.clone(),
            label_id: self.label.id.clone(),
            kind: LabelKind::Keypoints,
            color: state.colors.color_for(&self.field, &self.label.id),
        }
    }

    fn points(&self) -> Vec<RelPoint> {
        self.label.points.clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/keypoint.rs"]
mod tests;
