//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in viewport coordinates.

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
    ]
}

/// Four bars along the inside of `rect`. The side bars skip the corners
/// already covered by the top and bottom bars.
pub fn outlined_rect(rect: &Rect, color: [f32; 4], thickness: f32) -> Vec<Vertex> {
    // Thick enough to cover the whole rect: just fill it
    let t = thickness.max(0.0);
    if t * 2.0 >= rect.width() || t * 2.0 >= rect.height() {
        return filled_rect(rect, color).to_vec();
    }

    let inner_height = rect.height() - 2.0 * t;
    let bars = [
        Rect::new(rect.left(), rect.top(), rect.width(), t),
        Rect::new(rect.left(), rect.bottom() - t, rect.width(), t),
        Rect::new(rect.left(), rect.top() + t, t, inner_height),
        Rect::new(rect.right() - t, rect.top() + t, t, inner_height),
    ];

    let mut vertices = Vec::with_capacity(24);
    for bar in &bars {
        vertices.extend_from_slice(&filled_rect(bar, color));
    }
    vertices
}
