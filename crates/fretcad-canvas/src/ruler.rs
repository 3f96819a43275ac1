//! Horizontal and vertical rulers with inch labels.
//!
//! The tick interval steps by powers of two against zoom, mirroring the grid
//! so that every major grid line falls on a labelled tick. Ticks start at a
//! multiple of the interval. The vertical ruler labels `-y`, so values grow
//! upwards on screen.

use std::f64::consts::FRAC_PI_2;

use crate::color::Color;
use crate::draw::{DrawCommand, DrawList, TextAlign, TextBaseline};
use crate::geometry::{Point, Rect, Size};
use crate::grid::INCH_TO_PIXEL;

/// Minor ticks between two major ticks (plus one).
pub const MINOR_TICK_COUNT: i32 = 4;

const LABEL_FONT_SIZE: f64 = 10.0;
const LABEL_TOP_OFFSET: f64 = 2.0;
const MAX_TICKS: f64 = 5_000.0;
/// Largest tick index whose neighbours are still distinct `f64` values.
const MAX_TICK_INDEX: f64 = 9_007_199_254_740_992.0;

/// Major tick interval in inches for a zoom factor: `2^floor(-log2(zoom))`.
pub fn adaptive_ruler_interval(zoom: f64) -> f64 {
    if !(zoom.is_finite() && zoom > 0.0) {
        return 1.0;
    }
    2f64.powf((-zoom.log2()).floor())
}

/// Label text for a tick at `inches`.
///
/// Two decimals below one-inch spacing, whole numbers otherwise. Negative
/// zero prints as zero.
pub fn format_label(inches: f64, interval: f64) -> String {
    let value = if inches == 0.0 { 0.0 } else { inches };
    let decimals = if interval < 1.0 { 2 } else { 0 };
    let text = format!("{:.*}", decimals, value);
    // Values that round to zero from below
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Draws both ruler bars, their ticks and labels, and the corner unit label
pub struct RulerRenderer;

impl RulerRenderer {
    /// `thickness` is the ruler bar size; it is also the drawing inset.
    pub fn render(pan: Point, zoom: f64, size: Size, thickness: f64, out: &mut DrawList) {
        if thickness <= 0.0 {
            return;
        }
        out.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, size.width, thickness),
            color: Color::RULER_BACKGROUND,
        });
        out.push(DrawCommand::FillRect {
            rect: Rect::new(0.0, 0.0, thickness, size.height),
            color: Color::RULER_BACKGROUND,
        });

        let interval = adaptive_ruler_interval(zoom);
        Self::marks(
            Orientation::Horizontal,
            pan.x,
            zoom,
            interval,
            thickness,
            size.width,
            out,
        );
        Self::marks(
            Orientation::Vertical,
            pan.y,
            zoom,
            interval,
            thickness,
            size.height,
            out,
        );

        let corner = Point::new(thickness, thickness);
        out.push(DrawCommand::line(
            corner,
            Point::new(size.width, thickness),
            Color::RULER_BORDER,
            1.0,
        ));
        out.push(DrawCommand::line(
            corner,
            Point::new(thickness, size.height),
            Color::RULER_BORDER,
            1.0,
        ));

        out.push(DrawCommand::Text {
            text: "in".to_string(),
            position: Point::new(thickness / 2.0, thickness / 2.0),
            color: Color::RULER_TEXT,
            font_size: LABEL_FONT_SIZE,
            bold: true,
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
            rotation: 0.0,
        });
    }

    fn marks(
        orientation: Orientation,
        pan: f64,
        zoom: f64,
        interval: f64,
        start: f64,
        end: f64,
        out: &mut DrawList,
    ) {
        let scale = INCH_TO_PIXEL * zoom;
        let to_pixel = |inches: f64| inches * scale + pan + start;

        // Logical inches at the first and last ruler pixel
        let first = (-pan / scale / interval).floor();
        let last = ((end - pan - start) / scale / interval).ceil();
        if !(first.is_finite() && last.is_finite())
            || first.abs() > MAX_TICK_INDEX
            || last.abs() > MAX_TICK_INDEX
            || last - first > MAX_TICKS
        {
            tracing::warn!(
                "Ruler skipped: ticks {}..{} at zoom {:.3}",
                first,
                last,
                zoom
            );
            return;
        }

        let minor_step = interval / MINOR_TICK_COUNT as f64;
        for n in first as i64..=last as i64 {
            let inches = n as f64 * interval;
            let pixel = to_pixel(inches);

            if pixel >= start && pixel <= end {
                Self::tick(orientation, pixel, start, start * 3.0 / 4.0, out);

                let label = match orientation {
                    Orientation::Horizontal => format_label(inches, interval),
                    Orientation::Vertical => format_label(-inches, interval),
                };
                let text = match orientation {
                    Orientation::Horizontal => DrawCommand::Text {
                        text: label,
                        position: Point::new(pixel, LABEL_TOP_OFFSET),
                        color: Color::RULER_TEXT,
                        font_size: LABEL_FONT_SIZE,
                        bold: false,
                        align: TextAlign::Center,
                        baseline: TextBaseline::Top,
                        rotation: 0.0,
                    },
                    Orientation::Vertical => DrawCommand::Text {
                        text: label,
                        position: Point::new(start / 2.0, pixel),
                        color: Color::RULER_TEXT,
                        font_size: LABEL_FONT_SIZE,
                        bold: false,
                        align: TextAlign::Center,
                        baseline: TextBaseline::Middle,
                        rotation: -FRAC_PI_2,
                    },
                };
                out.push(text);
            }

            for j in 1..MINOR_TICK_COUNT {
                let minor = to_pixel(inches + j as f64 * minor_step);
                if minor >= start && minor <= end {
                    // Middle tick is longer
                    let tip = if j == MINOR_TICK_COUNT / 2 {
                        start * 13.0 / 16.0
                    } else {
                        start * 7.0 / 8.0
                    };
                    Self::tick(orientation, minor, start, tip, out);
                }
            }
        }
    }

    fn tick(orientation: Orientation, pixel: f64, base: f64, tip: f64, out: &mut DrawList) {
        let (from, to) = match orientation {
            Orientation::Horizontal => (Point::new(pixel, base), Point::new(pixel, tip)),
            Orientation::Vertical => (Point::new(base, pixel), Point::new(tip, pixel)),
        };
        out.push(DrawCommand::line(from, to, Color::RULER_TEXT, 1.0));
    }
}
