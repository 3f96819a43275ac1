//! Screen-space draw commands.
//!
//! Renderers never touch a real surface. They append [`DrawCommand`]s to a
//! [`DrawList`], and a [`DrawSurface`] backend (SVG, tiny-skia) replays the
//! list. Every coordinate and length here is in screen pixels.

use serde::Serialize;

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Horizontal anchor of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchor of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
}

/// A single immediate-mode drawing primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f64,
        /// Equal on/off dash length, solid when `None`
        dash: Option<f64>,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
        /// Equal on/off dash length, solid when `None`
        dash: Option<f64>,
    },
    Dot {
        center: Point,
        radius: f64,
        color: Color,
    },
    Text {
        text: String,
        position: Point,
        color: Color,
        font_size: f64,
        bold: bool,
        align: TextAlign,
        baseline: TextBaseline,
        /// Radians, clockwise positive, applied about `position`
        rotation: f64,
    },
}

impl DrawCommand {
    /// A solid line.
    pub fn line(from: Point, to: Point, color: Color, width: f64) -> Self {
        DrawCommand::Line {
            from,
            to,
            color,
            width,
            dash: None,
        }
    }
}

/// Ordered list of draw commands for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text of every label, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// JSON array of the commands, for hosts that paint on their own.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl Extend<DrawCommand> for DrawList {
    fn extend<T: IntoIterator<Item = DrawCommand>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

/// A backend that can replay a [`DrawList`].
pub trait DrawSurface {
    fn draw(&mut self, list: &DrawList);
}
