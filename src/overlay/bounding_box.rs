use crate::foundation::core::{Point, RelPoint};
use crate::foundation::error::GlanceResult;
use crate::foundation::math::distance_to_segment;
use crate::label::model::{BoundingBoxLabel, LabelKind};
use crate::overlay::{
    Containment, HIGHLIGHT_COLOR, HIGHLIGHT_DASH, Overlay, PointInfo, RenderState,
};
use crate::render::DrawSurface;

/// Overlay for axis-aligned bounding-box labels.
#[derive(Clone, Debug)]
pub struct BoundingBoxOverlay {
    field: String,
    label: BoundingBoxLabel,
}

impl BoundingBoxOverlay {
    /// Wrap a bounding-box label of `field`.
    pub fn new(field: impl Into<String>, label: BoundingBoxLabel) -> Self {
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

    fn pixel_corners(&self, state: &RenderState<'_>) -> [Point; 4] {
        self.label
            .corners()
            .map(|c| state.viewport.to_pixel(c))
    }
}

impl Overlay for BoundingBoxOverlay {
    fn contains(&self, state: &RenderState<'_>) -> Containment {
        let Some(pointer) = state.pointer else {
            return Containment::None;
        };
        if self.mouse_distance(state) <= state.stroke_width {
            return Containment::Border;
        }
        let [tl, _, br, _] = self.pixel_corners(state);
        let (min_x, max_x) = (tl.x.min(br.x), tl.x.max(br.x));
        let (min_y, max_y) = (tl.y.min(br.y), tl.y.max(br.y));
        if pointer.x > min_x && pointer.x < max_x && pointer.y > min_y && pointer.y < max_y {
            return Containment::Content;
        }
        Containment::None
    }

    fn draw(&self, surface: &mut dyn DrawSurface, state: &RenderState<'_>) -> GlanceResult<()> {
        let selected = state.is_selected(&self.label.id);
        let color = state.colors.color_for(&self.field, &self.label.id);
        let [tl, tr, br, bl] = self.pixel_corners(state);

        surface.begin_path()?;
        surface.move_to(tl)?;
        surface.line_to(tr)?;
        surface.line_to(br)?;
        surface.line_to(bl)?;
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
        Ok(())
    }

    fn mouse_distance(&self, state: &RenderState<'_>) -> f64 {
        let Some(pointer) = state.pointer else {
            return f64::INFINITY;
        };
        let [tl, tr, br, bl] = self.pixel_corners(state);
        [(tl, tr), (tr, br), (br, bl), (bl, tl)]
            .into_iter()
            .map(|(a, b)| distance_to_segment(pointer, a, b))
            .fold(f64::INFINITY, f64::min)
    }

    fn point_info(&self, state: &RenderState<'_>) -> PointInfo {
        PointInfo {
            field: self.field.clone(),
            label_id: self.label.id.clone(),
            kind: LabelKind::BoundingBox,
            color: state.colors.color_for(&self.field, &self.label.id),
        }
    }

    fn points(&self) -> Vec<RelPoint> {
        self.label.corners().to_vec()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/bounding_box.rs"]
mod tests;
