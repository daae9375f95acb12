use crate::types::{Mesh, Point};
use petgraph::visit::NodeIndexable;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds a k x k grid of unit-spaced points where every cell is split by
/// one diagonal, giving exactly `2 * (k - 1)^2` triangles.
pub fn grid_mesh(k: usize) -> Mesh {
    let mut mesh = Mesh::new_undirected();
    let at = |row: usize, col: usize| petgraph::graph::NodeIndex::new(row * k + col);

    for row in 0..k {
        for col in 0..k {
            mesh.add_node(Point::new(col as f64, row as f64));
        }
    }
    for row in 0..k {
        for col in 0..k {
            if col + 1 < k {
                mesh.add_edge(at(row, col), at(row, col + 1), ());
            }
            if row + 1 < k {
                mesh.add_edge(at(row, col), at(row + 1, col), ());
            }
            if col + 1 < k && row + 1 < k {
                mesh.add_edge(at(row, col), at(row + 1, col + 1), ());
            }
        }
    }

    mesh
}

/// Builds a connected mesh with `n` random points and about `m` edges.
/// Not a valid triangulation (edges may cross), but the triangle
/// extraction is purely combinatorial and does not care.
pub fn random_mesh(n: usize, m: usize, seed: u64) -> Mesh {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut mesh = Mesh::new_undirected();

    for i in 0..n {
        let x = rng.random_range(0.0..n as f64 * 5.0);
        let y = rng.random_range(0.0..n as f64 * 5.0);
        mesh.add_node(Point::new(x, y));
        if i > 0 {
            let j = rng.random_range(0..i);
            mesh.add_edge(mesh.from_index(i), mesh.from_index(j), ());
        }
    }

    for _ in n - 1..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s != t {
            mesh.add_edge(mesh.from_index(s), mesh.from_index(t), ());
        }
    }

    mesh
}
