use alloc::string::String;
use alloc::vec::Vec;

use vlist::{Color, Point, Rect, Surface};

/// One recorded drawing call.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    Clip(Option<Rect>),
    RoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    Text {
        origin: Point,
        text: String,
        color: Color,
    },
}

/// A [`Surface`] that records every call instead of drawing.
///
/// Useful for tests and for hosts that batch commands before handing them to a renderer.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { origin, text, .. } => Some((*origin, text.as_str())),
            _ => None,
        })
    }

    pub fn rounded_rects(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::RoundedRect { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clip(&mut self, rect: Option<Rect>) {
        self.commands.push(DrawCommand::Clip(rect));
    }

    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: String::from(text),
            color,
        });
    }
}
