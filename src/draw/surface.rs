//! The drawing contract a host backend implements.

use super::color::Color;
use super::style::StrokeStyle;
use kurbo::{BezPath, Point};
use serde::Serialize;

/// Opaque drawing sink supplied by the host.
///
/// Objects and modes emit primitive calls only; how they are rasterized is up
/// to the implementation.
pub trait DrawSurface {
    /// Fills a closed outline.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Strokes an outline.
    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle);

    /// Fills an axis-aligned ellipse.
    fn fill_ellipse(&mut self, center: Point, rx: f64, ry: f64, color: Color);

    /// Strokes an axis-aligned ellipse.
    fn stroke_ellipse(&mut self, center: Point, rx: f64, ry: f64, stroke: &StrokeStyle);

    /// Draws a straight line segment.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle);
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    FillPath {
        /// SVG path data of the outline
        svg: String,
        color: Color,
    },
    StrokePath {
        svg: String,
        stroke: StrokeStyle,
    },
    FillEllipse {
        center: (f64, f64),
        rx: f64,
        ry: f64,
        color: Color,
    },
    StrokeEllipse {
        center: (f64, f64),
        rx: f64,
        ry: f64,
        stroke: StrokeStyle,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: StrokeStyle,
    },
}

/// Surface that records every call, used by tests and the CLI `--draw` output.
#[derive(Debug, Default, Clone)]
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
}

impl DrawSurface for RecordingSurface {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            svg: path.to_svg(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokePath {
            svg: path.to_svg(),
            stroke: *stroke,
        });
    }

    fn fill_ellipse(&mut self, center: Point, rx: f64, ry: f64, color: Color) {
        self.commands.push(DrawCommand::FillEllipse {
            center: (center.x, center.y),
            rx,
            ry,
            color,
        });
    }

    fn stroke_ellipse(&mut self, center: Point, rx: f64, ry: f64, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::StrokeEllipse {
            center: (center.x, center.y),
            rx,
            ry,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &StrokeStyle) {
        self.commands.push(DrawCommand::Line {
            from: (from.x, from.y),
            to: (to.x, to.y),
            stroke: *stroke,
        });
    }
}
