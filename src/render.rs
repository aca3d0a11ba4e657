use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::GlanceResult;
use crate::overlay::{LabelOverlay, Overlay, RenderState};

pub mod cpu;
pub mod record;

/// Immediate-mode 2D command set consumed by overlay drawing.
///
/// A surface owns no state across render passes as far as the core is
/// concerned; overlays issue commands and never read anything back. Every
/// command is fallible and failures propagate uncaught to the render-loop
/// owner, which decides recovery policy.
pub trait DrawSurface {
    /// Start a new path, discarding any current one.
    fn begin_path(&mut self) -> GlanceResult<()>;

    /// Begin a new subpath at `p` (pixel space).
    fn move_to(&mut self, p: Point) -> GlanceResult<()>;

    /// Extend the current subpath with a line to `p`.
    fn line_to(&mut self, p: Point) -> GlanceResult<()>;

    /// Connect the current subpath back to its starting point.
    fn close_path(&mut self) -> GlanceResult<()>;

    /// Stroke the current path with the current stroke state.
    fn stroke(&mut self) -> GlanceResult<()>;

    /// Fill the current path with the current fill state.
    fn fill(&mut self) -> GlanceResult<()>;

    /// Set the stroke dash pattern; an empty slice means solid.
    fn set_line_dash(&mut self, dashes: &[f64]) -> GlanceResult<()>;

    /// Set the stroke width in pixels.
    fn set_line_width(&mut self, width: f64) -> GlanceResult<()>;

    /// Set the stroke color.
    fn set_stroke_color(&mut self, color: Rgba8) -> GlanceResult<()>;

    /// Set the fill color.
    fn set_fill_color(&mut self, color: Rgba8) -> GlanceResult<()>;

    /// Set the global opacity multiplier applied to subsequent stroke and
    /// fill commands, in `[0,1]`.
    fn set_global_alpha(&mut self, alpha: f32) -> GlanceResult<()>;
}

/// Premultiplied RGBA8 pixel readback of a rendered pass.
#[derive(Clone, Debug)]
pub struct FramePixels {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8, row-major, tightly packed.
    pub data: Vec<u8>,
}

/// One render pass: draw every overlay in painter's order.
///
/// Overlays are drawn in slice order, so later entries end up topmost; the
/// selection controller breaks distance ties the same way.
#[tracing::instrument(skip_all, fields(overlays = overlays.len()))]
pub fn draw_overlays(
    surface: &mut dyn DrawSurface,
    overlays: &[LabelOverlay],
    state: &RenderState<'_>,
) -> GlanceResult<()> {
    for overlay in overlays {
        overlay.draw(surface, state)?;
    }
    Ok(())
}
