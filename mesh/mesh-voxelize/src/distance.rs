//! Point-to-triangle distance queries.

use mesh_types::Triangle;
use nalgebra::Point3;

/// Find the point on a triangle closest to the query point.
///
/// Classifies the query against the triangle's Voronoi regions (three
/// vertices, three edges, interior face) and projects onto whichever
/// region holds it. Degenerate triangles resolve to an edge or vertex
/// case, so the result always lies on the triangle.
#[must_use]
pub fn closest_point_on_triangle(p: Point3<f64>, tri: &Triangle) -> Point3<f64> {
    let [a, b, c] = tri.vertices();

    let ab = b - a;
    let ac = c - a;
    let ap = p - a;

    // Vertex region A
    let d1 = ab.dot(&ap);
    let d2 = ac.dot(&ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return a;
    }

    // Vertex region B
    let bp = p - b;
    let d3 = ab.dot(&bp);
    let d4 = ac.dot(&bp);
    if d3 >= 0.0 && d4 <= d3 {
        return b;
    }

    // Edge region AB
    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return a + ab * v;
    }

    // Vertex region C
    let cp = p - c;
    let d5 = ab.dot(&cp);
    let d6 = ac.dot(&cp);
    if d6 >= 0.0 && d5 <= d6 {
        return c;
    }

    // Edge region AC
    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return a + ac * w;
    }

    // Edge region BC
    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return b + (c - b) * w;
    }

    // Interior face region: barycentric projection onto the plane.
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    a + ab * v + ac * w
}

/// Squared distance from a point to the closest point on a triangle.
#[must_use]
pub fn point_triangle_distance_squared(p: Point3<f64>, tri: &Triangle) -> f64 {
    (closest_point_on_triangle(p, tri) - p).norm_squared()
}
