//! Render descriptors for visualization hosts.
//!
//! The model draws nothing itself.  [`Model::portray`][crate::Model::portray]
//! maps an agent to a backend-neutral [`Portrayal`] that a host can turn
//! into canvas shapes, SVG, or terminal cells.  `Serialize` is derived
//! unconditionally so descriptors can cross a process boundary as JSON.

use serde::Serialize;

/// Shape vocabulary understood by grid-drawing hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Rect,
    Circle,
}

/// How to draw one agent on a grid canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Portrayal {
    pub shape:  Shape,
    pub filled: bool,

    /// Cell-relative width and height, in `(0, 1]`.
    pub w: f32,
    pub h: f32,

    /// Draw layer; higher layers render on top.
    pub layer: u32,
    pub color: &'static str,

    /// Optional label drawn over the shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<&'static str>,
}
