#![allow(dead_code)]

use tictac_face::{Canvas, Point, Rectangle, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect(Rectangle, Rgb),
    FillCircle(Point, u32, Rgb),
    DrawCircle(Point, u32, Rgb),
    Line(Point, Point, u32, Rgb),
}

/// Canvas that records every draw call
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn lines(&self) -> Vec<DrawCommand> {
        self.commands
            .iter()
            .copied()
            .filter(|command| matches!(command, DrawCommand::Line(..)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rectangle, color: Rgb) {
        self.commands.push(DrawCommand::FillRect(rect, color));
    }

    fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle(center, radius, color));
    }

    fn draw_circle(&mut self, center: Point, radius: u32, color: Rgb) {
        self.commands.push(DrawCommand::DrawCircle(center, radius, color));
    }

    fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb) {
        self.commands.push(DrawCommand::Line(from, to, width, color));
    }
}
