//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::GameObject;

/// Generate vertices for a filled axis-aligned rectangle
///
/// Two triangles, six vertices, in window pixel coordinates.
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Generate the full scene for one frame: ball first, then paddle
///
/// Positions are truncated to whole pixels before building the quads, so
/// the drawn rectangles land exactly where the rasterizer would put
/// integer-cast coordinates.
pub fn frame_vertices(ball: &GameObject, paddle: &GameObject) -> Vec<Vertex> {
    let mut vertices = rect(ball.pos.trunc(), ball.size, colors::BALL);
    vertices.extend(rect(paddle.pos.trunc(), paddle.size, colors::PADDLE));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_all_corners() {
        let vertices = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), colors::BALL);
        assert_eq!(vertices.len(), 6);

        for corner in [[10.0, 20.0], [40.0, 20.0], [40.0, 60.0], [10.0, 60.0]] {
            assert!(
                vertices.iter().any(|v| v.position == corner),
                "missing corner {corner:?}"
            );
        }

        assert!(vertices.iter().all(|v| v.color == colors::BALL));
    }

    #[test]
    fn test_frame_vertices_builds_both_quads() {
        let ball = GameObject::ball();
        let paddle = GameObject::paddle();

        let vertices = frame_vertices(&ball, &paddle);

        assert_eq!(vertices.len(), 12);
        // Ball quad first (near the top), paddle quad second (near the bottom)
        assert_eq!(vertices[0].position[1], 20.0);
        assert_eq!(vertices[6].position[1], 560.0);
    }

    #[test]
    fn test_frame_vertices_snap_to_whole_pixels() {
        // Serve position has a fractional x (392.5); the quad is built from
        // the truncated value
        let ball = GameObject::ball();
        let paddle = GameObject::paddle();

        let vertices = frame_vertices(&ball, &paddle);

        assert_eq!(vertices[0].position, [392.0, 20.0]);
        assert_eq!(vertices[6].position, [350.0, 560.0]);
    }
}
