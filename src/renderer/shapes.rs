//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Thick line segment from `a` to `b`
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    quad([a + perp, a - perp, b - perp, b + perp], color)
}

/// Axis-aligned rectangle from its top-left corner
pub fn rect(top_left: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let br = top_left + size;
    quad(
        [
            top_left,
            Vec2::new(br.x, top_left.y),
            br,
            Vec2::new(top_left.x, br.y),
        ],
        color,
    )
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Soft halo: concentric discs whose alpha falls off toward the edge
pub fn glow(center: Vec2, radius: f32, color: [f32; 4], layers: u32) -> Vec<Vertex> {
    let layers = layers.max(1);
    let mut vertices = Vec::new();
    for i in 0..layers {
        let t = 1.0 - i as f32 / layers as f32;
        let mut c = color;
        c[3] = color[3] / layers as f32;
        vertices.extend(circle(center, radius * t, c, 24));
    }
    vertices
}

fn quad(c: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    [c[0], c[1], c[2], c[0], c[2], c[3]]
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}
