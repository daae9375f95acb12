/// A 2D point. Identified elsewhere by its node index in the [`Mesh`]
/// (0-based, order of appearance in the input).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point.
    pub fn dist(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// A triangle as a sorted triple of point indices, so each geometric
/// triangle has exactly one representation.
pub type Triangle = [usize; 3];

/// The circumscribed circle of one triangle.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Wrapper for petgraph's graph type.
///
/// Node weights are point coordinates. Node insertion order is the point
/// order from the input file and edge insertion order is the edge order,
/// so iterating the graph reproduces the input sequences.
pub type Mesh = petgraph::graph::UnGraph<Point, ()>;
