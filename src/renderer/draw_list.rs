//! Recorded draw commands
//!
//! Used for headless runs and to inspect frames in tests.

use serde::Serialize;

use super::Surface;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: String,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        color: String,
    },
}

impl DrawCommand {
    pub fn color(&self) -> &str {
        match self {
            DrawCommand::Rect { color, .. } | DrawCommand::Circle { color, .. } => color,
        }
    }
}

/// A frame's worth of draw commands
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop the previous frame, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            cx,
            cy,
            r,
            color: color.to_string(),
        });
    }
}
