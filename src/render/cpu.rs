use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::{GlanceError, GlanceResult};
use crate::render::{DrawSurface, FramePixels};

/// CPU raster surface backed by `vello_cpu`.
///
/// Commands accumulate into a render context; [`CpuSurface::finish`]
/// rasterizes the pass and reads back premultiplied RGBA8 pixels.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    path: vello_cpu::kurbo::BezPath,
    subpath_open: bool,
    line_width: f64,
    dashes: Vec<f64>,
    stroke_color: Rgba8,
    fill_color: Rgba8,
    alpha: f32,
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

impl CpuSurface {
    /// Create a surface for `canvas`, rejecting dimensions beyond `u16`.
    pub fn new(canvas: Canvas) -> GlanceResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| GlanceError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| GlanceError::render("surface height exceeds u16"))?;

        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            path: vello_cpu::kurbo::BezPath::new(),
            subpath_open: false,
            line_width: 2.0,
            dashes: Vec::new(),
            stroke_color: Rgba8::WHITE,
            fill_color: Rgba8::WHITE,
            alpha: 1.0,
        })
    }

    /// Rasterize everything issued so far and read back the pixels.
    pub fn finish(&mut self) -> FramePixels {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FramePixels {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }

    fn paint(&self, color: Rgba8) -> vello_cpu::peniko::Color {
        let faded = color.with_alpha(self.alpha);
        vello_cpu::peniko::Color::from_rgba8(faded.r, faded.g, faded.b, faded.a)
    }

    fn check_point(p: Point) -> GlanceResult<Point> {
        if !p.x.is_finite() || !p.y.is_finite() {
            return Err(GlanceError::render(format!(
                "non-finite path coordinate ({}, {})",
                p.x, p.y
            )));
        }
        Ok(p)
    }
}

impl DrawSurface for CpuSurface {
    fn begin_path(&mut self) -> GlanceResult<()> {
        self.path = vello_cpu::kurbo::BezPath::new();
        self.subpath_open = false;
        Ok(())
    }

    fn move_to(&mut self, p: Point) -> GlanceResult<()> {
        self.path.move_to(point_to_cpu(Self::check_point(p)?));
        self.subpath_open = true;
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> GlanceResult<()> {
        if !self.subpath_open {
            return Err(GlanceError::render("line_to issued before move_to"));
        }
        self.path.line_to(point_to_cpu(Self::check_point(p)?));
        Ok(())
    }

    fn close_path(&mut self) -> GlanceResult<()> {
        if !self.subpath_open {
            return Err(GlanceError::render("close_path issued before move_to"));
        }
        self.path.close_path();
        Ok(())
    }

    fn stroke(&mut self) -> GlanceResult<()> {
        let mut stroke = vello_cpu::kurbo::Stroke::new(self.line_width);
        if !self.dashes.is_empty() {
            stroke = stroke.with_dashes(0.0, self.dashes.iter().copied());
        }
        self.ctx.set_paint(self.paint(self.stroke_color));
        self.ctx.set_stroke(stroke);
        self.ctx.stroke_path(&self.path);
        Ok(())
    }

    fn fill(&mut self) -> GlanceResult<()> {
        self.ctx.set_paint(self.paint(self.fill_color));
        self.ctx.fill_path(&self.path);
        Ok(())
    }

    fn set_line_dash(&mut self, dashes: &[f64]) -> GlanceResult<()> {
        if dashes.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(GlanceError::render("dash lengths must be finite and >= 0"));
        }
        self.dashes = dashes.to_vec();
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> GlanceResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GlanceError::render("line width must be > 0"));
        }
        self.line_width = width;
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Rgba8) -> GlanceResult<()> {
        self.stroke_color = color;
        Ok(())
    }

    fn set_fill_color(&mut self, color: Rgba8) -> GlanceResult<()> {
        self.fill_color = color;
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f32) -> GlanceResult<()> {
        if !alpha.is_finite() {
            return Err(GlanceError::render("global alpha must be finite"));
        }
        self.alpha = alpha.clamp(0.0, 1.0);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
