//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen space (y down).

use glam::Vec2;

use super::vertex::Vertex;

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(min, size, color, color)
}

/// Rectangle blending from `top` to `bottom`
pub fn gradient_rect(min: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// A thick line segment as one quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Fill the area between a polyline and a horizontal floor at `bottom`
pub fn fill_below(points: &[Vec2], bottom: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);
    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
        vertices.push(Vertex::new(p1.x, bottom, color));

        vertices.push(Vertex::new(p1.x, bottom, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
        vertices.push(Vertex::new(p2.x, bottom, color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [15.0, 28.0]));
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line(p, p, 2.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_line_has_width() {
        let verts = line(Vec2::ZERO, Vec2::new(0.0, -10.0), 2.0, [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().any(|&x| (x - 1.0).abs() < 1e-6));
        assert!(xs.iter().any(|&x| (x + 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_fill_below_segments() {
        let points = [Vec2::new(0.0, 5.0), Vec2::new(1.0, 6.0), Vec2::new(2.0, 4.0)];
        assert_eq!(fill_below(&points, 10.0, [1.0; 4]).len(), 12);
        assert!(fill_below(&points[..1], 10.0, [1.0; 4]).is_empty());
    }
}
