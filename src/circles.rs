use crate::error::Error;
use crate::types::{Circle, Mesh, Point, Triangle};
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;

/// Returns the circumscribed circle of the triangle (a, b, c) via the
/// determinant-based circumcenter formula.
///
/// Collinear points have no circumcircle; the determinant is zero there
/// and the call fails with [`Error::CollinearTriangle`] instead of
/// dividing by zero. The reported triple is the caller-supplied `tri`.
pub fn circumcircle(a: Point, b: Point, c: Point, tri: Triangle) -> Result<Circle, Error> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d == 0.0 {
        return Err(Error::CollinearTriangle(tri));
    }

    let a2 = a.x * a.x + a.y * a.y;
    let b2 = b.x * b.x + b.y * b.y;
    let c2 = c.x * c.x + c.y * c.y;
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;

    let center = Point::new(ux, uy);
    Ok(Circle { center, radius: center.dist(&a) })
}

/// Computes the circumcircle of every triangle. The first degenerate
/// triangle aborts the whole batch.
pub fn circles(mesh: &Mesh, tris: &HashSet<Triangle>) -> Result<Vec<Circle>, Error> {
    let mut result = Vec::with_capacity(tris.len());
    for &tri in tris {
        let [x, y, z] = tri;
        result.push(circumcircle(
            mesh[NodeIndex::new(x)],
            mesh[NodeIndex::new(y)],
            mesh[NodeIndex::new(z)],
            tri,
        )?);
    }
    Ok(result)
}
