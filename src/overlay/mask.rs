use crate::foundation::core::{Point, RelPoint};
use crate::foundation::error::GlanceResult;
use crate::foundation::math::{distance_to_segment, point_in_ring};
use crate::label::model::{LabelKind, MaskLabel};
use crate::overlay::{
    Containment, HIGHLIGHT_COLOR, HIGHLIGHT_DASH, Overlay, PointInfo, RenderState,
    SELECTED_FILL_ALPHA, UNSELECTED_FILL_ALPHA,
};
use crate::render::DrawSurface;

/// Overlay for region-mask labels described by boundary contours.
#[derive(Clone, Debug)]
pub struct MaskOverlay {
    field: String,
    label: MaskLabel,
}

impl MaskOverlay {
    /// Wrap a mask label of `field`.
    pub fn new(field: impl Into<String>, label: MaskLabel) -> Self {
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

    fn pixel_ring(&self, state: &RenderState<'_>, ring: &[RelPoint]) -> Vec<Point> {
        ring.iter().map(|p| state.viewport.to_pixel(*p)).collect()
    }

    fn pointer_inside(&self, state: &RenderState<'_>, pointer: Point) -> bool {
        self.label
            .contours
            .iter()
            .filter(|ring| ring.len() >= 3)
            .any(|ring| point_in_ring(pointer, &self.pixel_ring(state, ring)))
    }

    fn boundary_distance(&self, state: &RenderState<'_>, pointer: Point) -> f64 {
        let mut best = f64::INFINITY;
        for ring in &self.label.contours {
            if ring.len() < 2 {
                continue;
            }
            let px = self.pixel_ring(state, ring);
            for pair in px.windows(2) {
                best = best.min(distance_to_segment(pointer, pair[0], pair[1]));
            }
            best = best.min(distance_to_segment(pointer, px[px.len() - 1], px[0]));
        }
        best
    }
}

impl Overlay for MaskOverlay {
    fn contains(&self, state: &RenderState<'_>) -> Containment {
        let Some(pointer) = state.pointer else {
            return Containment::None;
        };
        if self.boundary_distance(state, pointer) <= state.stroke_width {
            return Containment::Border;
        }
        if self.pointer_inside(state, pointer) {
            return Containment::Content;
        }
        Containment::None
    }

    fn draw(&self, surface: &mut dyn DrawSurface, state: &RenderState<'_>) -> GlanceResult<()> {
        let selected = state.is_selected(&self.label.id);
        let color = state.colors.color_for(&self.field, &self.label.id);

        for ring in &self.label.contours {
            if ring.len() < 3 {
                continue;
            }
            let px = self.pixel_ring(state, ring);

            surface.begin_path()?;
            surface.move_to(px[0])?;
            for p in &px[1..] {
                surface.line_to(*p)?;
            }
            surface.close_path()?;

            surface.set_line_width(state.stroke_width)?;
            if selected {
                surface.set_line_dash(&HIGHLIGHT_DASH)?;
                surface.set_stroke_color(HIGHLIGHT_COLOR)?;
                surface.stroke()?;
                surface.set_line_dash(&[])?;
            }
            surface.set_stroke_color(color)?;
            surface.stroke()?;

            surface.set_fill_color(color)?;
            surface.set_global_alpha(if selected {
                SELECTED_FILL_ALPHA
            } else {
                UNSELECTED_FILL_ALPHA
            })?;
            surface.fill()?;
            surface.set_global_alpha(1.0)?;
        }
        Ok(())
    }

    fn mouse_distance(&self, state: &RenderState<'_>) -> f64 {
        let Some(pointer) = state.pointer else {
            return f64::INFINITY;
        };
        // Anywhere inside the region counts as distance zero.
        if self.pointer_inside(state, pointer) {
            return 0.0;
        }
        self.boundary_distance(state, pointer)
    }

    fn point_info(&self, state: &RenderState<'_>) -> PointInfo {
        PointInfo {
            field: self.field.clone(),
            label_id: self.label.id.clone(),
            kind: LabelKind::Mask,
            color: state.colors.color_for(&self.field, &self.label.id),
        }
    }

    fn points(&self) -> Vec<RelPoint> {
        self.label.contours.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/mask.rs"]
mod tests;
