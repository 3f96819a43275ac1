//! Raster surface backed by tiny-skia.
//! Replays a draw list into a pixmap for PNG snapshots and previews.
//!
//! Features:
//! - Anti-aliased lines, dashes and dots
//! - Conversion to an `image::RgbImage`
//!
//! Text is not rasterised (there is no font stack); skipped labels are counted.

use std::path::Path;

use image::{Rgb, RgbImage};
use tiny_skia::{
    FillRule, Paint, PathBuilder, Pixmap, Rect as SkRect, Stroke, StrokeDash, Transform,
};

use crate::color::Color;
use crate::draw::{DrawCommand, DrawList, DrawSurface};
use crate::error::{RenderError, Result};

/// tiny-skia pixmap that implements [`DrawSurface`]
pub struct PixmapSurface {
    pixmap: Pixmap,
    skipped_text: usize,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation { width, height })?;
        Ok(Self {
            pixmap,
            skipped_text: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Labels dropped because text is not rasterised.
    pub fn skipped_text(&self) -> usize {
        self.skipped_text
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Colour of one pixel, alpha ignored.
    pub fn pixel_rgb(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some([p.red(), p.green(), p.blue()])
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            // Opaque background, so premultiplied equals straight colour
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgb_image().save(path)?;
        tracing::info!("PNG snapshot written to {}", path.display());
        Ok(())
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = true;
        paint
    }

    fn stroke(width: f64, dash: Option<f64>) -> Stroke {
        Stroke {
            width: width as f32,
            dash: dash.and_then(|d| StrokeDash::new(vec![d as f32, d as f32], 0.0)),
            ..Default::default()
        }
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Option<SkRect> {
        SkRect::from_xywh(x as f32, y as f32, w as f32, h as f32)
    }

    fn replay(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::FillRect { rect, color } => {
                if let Some(r) = Self::rect(rect.x, rect.y, rect.width, rect.height) {
                    self.pixmap
                        .fill_rect(r, &Self::paint(*color), Transform::identity(), None);
                }
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                width,
                dash,
            } => {
                if let Some(r) = Self::rect(rect.x, rect.y, rect.width, rect.height) {
                    let path = PathBuilder::from_rect(r);
                    self.pixmap.stroke_path(
                        &path,
                        &Self::paint(*color),
                        &Self::stroke(*width, *dash),
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
                dash,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.x as f32, from.y as f32);
                pb.line_to(to.x as f32, to.y as f32);
                if let Some(path) = pb.finish() {
                    self.pixmap.stroke_path(
                        &path,
                        &Self::paint(*color),
                        &Self::stroke(*width, *dash),
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::Dot {
                center,
                radius,
                color,
            } => {
                if let Some(path) =
                    PathBuilder::from_circle(center.x as f32, center.y as f32, *radius as f32)
                {
                    self.pixmap.fill_path(
                        &path,
                        &Self::paint(*color),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            DrawCommand::Text { .. } => self.skipped_text += 1,
        }
    }
}

impl DrawSurface for PixmapSurface {
    fn draw(&mut self, list: &DrawList) {
        for command in list {
            self.replay(command);
        }
        if self.skipped_text > 0 {
            tracing::trace!("Pixmap skipped {} text labels", self.skipped_text);
        }
    }
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("skipped_text", &self.skipped_text)
            .finish()
    }
}
