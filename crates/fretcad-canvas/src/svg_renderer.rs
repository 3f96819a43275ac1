//! SVG surface: replays a draw list into an SVG document string.
//!
//! Everything is emitted, including ruler labels, so an SVG snapshot is the
//! complete picture of a pane.

use std::fmt::Write as _;
use std::path::Path;

use crate::draw::{DrawCommand, DrawList, DrawSurface, TextAlign, TextBaseline};
use crate::error::Result;

/// Accumulates SVG elements for one frame
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The complete SVG document.
    pub fn to_svg_string(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg_string())?;
        tracing::info!("SVG snapshot written to {}", path.display());
        Ok(())
    }

    fn push(&mut self, command: &DrawCommand) {
        // Writing to a String cannot fail
        let _ = match command {
            DrawCommand::FillRect { rect, color } => writeln!(
                self.body,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                color
            ),
            DrawCommand::StrokeRect {
                rect,
                color,
                width,
                dash,
            } => writeln!(
                self.body,
                "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                num(rect.x),
                num(rect.y),
                num(rect.width),
                num(rect.height),
                color,
                num(*width),
                dash_attr(*dash)
            ),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
                dash,
            } => writeln!(
                self.body,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                color,
                num(*width),
                dash_attr(*dash)
            ),
            DrawCommand::Dot {
                center,
                radius,
                color,
            } => writeln!(
                self.body,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                num(center.x),
                num(center.y),
                num(*radius),
                color
            ),
            DrawCommand::Text {
                text,
                position,
                color,
                font_size,
                bold,
                align,
                baseline,
                rotation,
            } => {
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                let baseline = match baseline {
                    TextBaseline::Top => "hanging",
                    TextBaseline::Middle => "central",
                    TextBaseline::Alphabetic => "alphabetic",
                };
                let transform = if *rotation != 0.0 {
                    format!(
                        " transform=\"rotate({} {} {})\"",
                        num(rotation.to_degrees()),
                        num(position.x),
                        num(position.y)
                    )
                } else {
                    String::new()
                };
                writeln!(
                    self.body,
                    "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-family=\"Arial, sans-serif\" font-size=\"{}\"{} text-anchor=\"{}\" dominant-baseline=\"{}\"{}>{}</text>",
                    num(position.x),
                    num(position.y),
                    color,
                    num(*font_size),
                    if *bold { " font-weight=\"bold\"" } else { "" },
                    anchor,
                    baseline,
                    transform,
                    escape(text)
                )
            }
        };
    }
}

impl DrawSurface for SvgSurface {
    fn draw(&mut self, list: &DrawList) {
        for command in list {
            self.push(command);
        }
    }
}

/// Compact number formatting: at most three decimals, no trailing zeros.
fn num(value: f64) -> String {
    let s = format!("{:.3}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

fn dash_attr(dash: Option<f64>) -> String {
    match dash {
        Some(d) => format!(" stroke-dasharray=\"{} {}\"", num(d), num(d)),
        None => String::new(),
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
