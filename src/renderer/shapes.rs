//! Shape generation for 2D primitives
//!
//! Output is in normalized device coordinates: x and y in [-1, 1], y up.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Arena, Snapshot};

/// Segments used for the ball fan
pub const BALL_SEGMENTS: u32 = 16;

/// Map an arena point (origin top-left, y down) into NDC
#[inline]
pub fn to_ndc(p: Vec2, arena: &Arena) -> Vec2 {
    let size = arena.size();
    Vec2::new(p.x / size.x * 2.0 - 1.0, 1.0 - p.y / size.y * 2.0)
}

/// Generate vertices for an axis-aligned rectangle (two triangles)
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4], arena: &Arena) -> Vec<Vertex> {
    let half = size / 2.0;
    let tl = to_ndc(center + Vec2::new(-half.x, -half.y), arena);
    let tr = to_ndc(center + Vec2::new(half.x, -half.y), arena);
    let bl = to_ndc(center + Vec2::new(-half.x, half.y), arena);
    let br = to_ndc(center + Vec2::new(half.x, half.y), arena);

    vec![
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Generate vertices for a filled ellipse inscribed in the given extents
pub fn ellipse(
    center: Vec2,
    half_extents: Vec2,
    color: [f32; 4],
    segments: u32,
    arena: &Arena,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);
    let c = to_ndc(center, arena);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = to_ndc(
            center + Vec2::new(theta1.cos(), theta1.sin()) * half_extents,
            arena,
        );
        let p2 = to_ndc(
            center + Vec2::new(theta2.cos(), theta2.sin()) * half_extents,
            arena,
        );

        // Triangle from center to edge
        vertices.push(Vertex::new(c.x, c.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Triangle list for everything but text: both paddles, then the ball
pub fn frame_vertices(snap: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(12 + (BALL_SEGMENTS * 3) as usize);
    for paddle in &snap.paddles {
        vertices.extend(rect(paddle.center, paddle.size, colors::PADDLE, &snap.arena));
    }
    vertices.extend(ellipse(
        snap.ball_pos,
        snap.ball_half_extents,
        colors::BALL,
        BALL_SEGMENTS,
        &snap.arena,
    ));
    vertices
}
