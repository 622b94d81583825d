//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a rectangle
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = rect.pos;
    let br = rect.pos + rect.size;
    let tr = Vec2::new(br.x, tl.y);
    let bl = Vec2::new(tl.x, br.y);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Screen-space pixels to normalized device coordinates (y up)
pub fn to_ndc(vertices: &mut [Vertex], screen: Vec2) {
    for v in vertices {
        v.position[0] = v.position[0] / screen.x * 2.0 - 1.0;
        v.position[1] = 1.0 - v.position[1] / screen.y * 2.0;
    }
}
