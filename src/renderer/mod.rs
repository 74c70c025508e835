//! Rendering
//!
//! The game draws through the `Surface` trait: filled and outlined
//! rectangles in viewport coordinates. `DrawList` records those commands;
//! the wgpu `RenderState` turns a recorded list into triangles on screen.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use scene::Render;
pub use vertex::Vertex;

use crate::sim::Rect;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA for vertex data
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Something the game can draw rectangles onto
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline drawn inside `rect`, `thickness` units wide
    fn outline_rect(&mut self, rect: Rect, color: Color, thickness: f32);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        color: Color,
    },
    Outline {
        rect: Rect,
        color: Color,
        thickness: f32,
    },
}

/// Surface that records commands in submission order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation for the next frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Triangulate every command, in order
    pub fn to_vertices(&self) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            match *command {
                DrawCommand::Fill { rect, color } => {
                    vertices.extend_from_slice(&shapes::filled_rect(&rect, color.to_rgba()));
                }
                DrawCommand::Outline {
                    rect,
                    color,
                    thickness,
                } => {
                    vertices.extend(shapes::outlined_rect(&rect, color.to_rgba(), thickness));
                }
            }
        }
        vertices
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn outline_rect(&mut self, rect: Rect, color: Color, thickness: f32) {
        self.commands.push(DrawCommand::Outline {
            rect,
            color,
            thickness,
        });
    }
}
