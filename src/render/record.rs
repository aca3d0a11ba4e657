use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::GlanceResult;
use crate::render::DrawSurface;

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// `begin_path`.
    BeginPath,
    /// `move_to`.
    MoveTo(Point),
    /// `line_to`.
    LineTo(Point),
    /// `close_path`.
    ClosePath,
    /// `stroke`.
    Stroke,
    /// `fill`.
    Fill,
    /// `set_line_dash`.
    SetLineDash(Vec<f64>),
    /// `set_line_width`.
    SetLineWidth(f64),
    /// `set_stroke_color`.
    SetStrokeColor(Rgba8),
    /// `set_fill_color`.
    SetFillColor(Rgba8),
    /// `set_global_alpha`.
    SetGlobalAlpha(f32),
}

/// Surface that records the command stream instead of rasterizing it.
///
/// Useful in tests and for headless consumers that forward the stream to a
/// remote drawing target.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    /// Commands in issue order.
    pub commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_path(&mut self) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, p: Point) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::MoveTo(p));
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::LineTo(p));
        Ok(())
    }

    fn close_path(&mut self) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::ClosePath);
        Ok(())
    }

    fn stroke(&mut self) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::Fill);
        Ok(())
    }

    fn set_line_dash(&mut self, dashes: &[f64]) -> GlanceResult<()> {
        self.commands
            .push(SurfaceCommand::SetLineDash(dashes.to_vec()));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::SetLineWidth(width));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Rgba8) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::SetStrokeColor(color));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Rgba8) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::SetFillColor(color));
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f32) -> GlanceResult<()> {
        self.commands.push(SurfaceCommand::SetGlobalAlpha(alpha));
        Ok(())
    }
}
