use crate::foundation::core::{Point, RelPoint};
use crate::foundation::error::GlanceResult;
use crate::foundation::math::{distance_to_segment, point_in_ring};
use crate::label::model::{LabelKind, PolylineLabel};
use crate::overlay::{
    Containment, HIGHLIGHT_COLOR, HIGHLIGHT_DASH, Overlay, PointInfo, RenderState,
    SELECTED_FILL_ALPHA, UNSELECTED_FILL_ALPHA,
};
use crate::render::DrawSurface;

/// Overlay for multi-path polyline labels.
#[derive(Clone, Debug)]
pub struct PolylineOverlay {
    field: String,
    label: PolylineLabel,
}

impl PolylineOverlay {
    /// Wrap a polyline label of `field`.
    pub fn new(field: impl Into<String>, label: PolylineLabel) -> Self {
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

    fn pixel_path(&self, state: &RenderState<'_>, path: &[RelPoint]) -> Vec<Point> {
        path.iter().map(|p| state.viewport.to_pixel(*p)).collect()
    }
}

impl Overlay for PolylineOverlay {
    fn contains(&self, state: &RenderState<'_>) -> Containment {
        // Open polylines have no interior or border to be "in".
        if !self.label.closed {
            return Containment::None;
        }
        let Some(pointer) = state.pointer else {
            return Containment::None;
        };

        if self.mouse_distance(state) <= state.stroke_width {
            return Containment::Border;
        }
        for path in &self.label.points {
            if path.len() < 3 {
                continue;
            }
            if point_in_ring(pointer, &self.pixel_path(state, path)) {
                return Containment::Content;
            }
        }
        Containment::None
    }

    fn draw(&self, surface: &mut dyn DrawSurface, state: &RenderState<'_>) -> GlanceResult<()> {
        let selected = state.is_selected(&self.label.id);
        let color = state.colors.color_for(&self.field, &self.label.id);

        for path in &self.label.points {
            if path.len() < 2 {
                continue;
            }

            surface.begin_path()?;
            surface.move_to(state.viewport.to_pixel(path[0]))?;
            for p in &path[1..] {
                surface.line_to(state.viewport.to_pixel(*p))?;
            }
            if self.label.closed {
                surface.close_path()?;
            }

            surface.set_line_width(state.stroke_width)?;
            if selected {
                // Highlight pass beneath the normal stroke.
                surface.set_line_dash(&HIGHLIGHT_DASH)?;
                surface.set_stroke_color(HIGHLIGHT_COLOR)?;
                surface.stroke()?;
                surface.set_line_dash(&[])?;
            }
            surface.set_stroke_color(color)?;
            surface.stroke()?;

            if self.label.filled {
                surface.set_fill_color(color)?;
                surface.set_global_alpha(if selected {
                    SELECTED_FILL_ALPHA
                } else {
                    UNSELECTED_FILL_ALPHA
                })?;
                surface.fill()?;
                surface.set_global_alpha(1.0)?;
            }
        }
        Ok(())
    }

    fn mouse_distance(&self, state: &RenderState<'_>) -> f64 {
        let Some(pointer) = state.pointer else {
            return f64::INFINITY;
        };

        let mut best = f64::INFINITY;
        for path in &self.label.points {
            if path.len() < 2 {
                continue;
            }
            let px = self.pixel_path(state, path);
            for pair in px.windows(2) {
                best = best.min(distance_to_segment(pointer, pair[0], pair[1]));
            }
            if self.label.closed {
                best = best.min(distance_to_segment(pointer, px[px.len() - 1], px[0]));
            }
        }
        best
    }

    fn point_info(&self, state: &RenderState<'_>) -> PointInfo {
        PointInfo {
            field: self.field.clone(),
            label_id: self.label.id.clone(),
            kind: LabelKind::Polyline,
            color: state.colors.color_for(&self.field, &self.label.id),
        }
    }

    fn points(&self) -> Vec<RelPoint> {
        self.label.points.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/polyline.rs"]
mod tests;
