use crate::types::{Mesh, Triangle};
use hashbrown::{HashMap, HashSet};
use petgraph::visit::EdgeRef;

/// Builds the adjacency map of the mesh: point index to the set of
/// indices directly connected to it. Each edge contributes both
/// directions, so the map is symmetric; duplicate edges collapse.
pub fn adjacency(mesh: &Mesh) -> HashMap<usize, HashSet<usize>> {
    let mut adj: HashMap<usize, HashSet<usize>> = HashMap::new();
    for e in mesh.edge_references() {
        let (i, j) = (e.source().index(), e.target().index());
        adj.entry(i).or_default().insert(j);
        adj.entry(j).or_default().insert(i);
    }
    adj
}

/// Returns all triangles implied by the edge set.
///
/// A triangle exists iff each pair of its vertices shares an edge, so for
/// every edge (x, y) each common neighbor z of x and y closes a 3-cycle.
/// The triple is sorted before insertion; a triangle is discovered once
/// per constituent edge, up to 3 times, and kept once.
///
/// Only 3-cycles reachable through an explicit edge are found. The input
/// edges are assumed to be the actual triangle sides of a triangulation;
/// nothing is inferred from point proximity.
pub fn triangles(mesh: &Mesh) -> HashSet<Triangle> {
    let adj = adjacency(mesh);
    let mut result = HashSet::new();
    for e in mesh.edge_references() {
        let (x, y) = (e.source().index(), e.target().index());
        for &z in adj[&x].intersection(&adj[&y]) {
            if z != x && z != y {
                result.insert(sorted_triple(x, y, z));
            }
        }
    }
    result
}

fn sorted_triple(x: usize, y: usize, z: usize) -> Triangle {
    let mut t = [x, y, z];
    t.sort_unstable();
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_str;
    use crate::testing::meshes::{grid_mesh, random_mesh};

    #[test]
    fn test_single_triangle() {
        let mesh = from_str("3\n0.0 0.0\n1.0 0.0\n0.0 1.0\n0 1\n1 2\n0 2\n").unwrap();
        let tris = triangles(&mesh);
        assert_eq!(tris, HashSet::from([[0, 1, 2]]));
    }

    #[test]
    fn test_single_edge_has_no_closure() {
        let mesh = from_str("2\n0.0 0.0\n1.0 0.0\n0 1\n").unwrap();
        assert!(triangles(&mesh).is_empty());
    }

    #[test]
    fn test_open_path_is_not_a_triangle() {
        // 0 - 1 - 2 without the closing edge
        let mesh = from_str("3\n0.0 0.0\n1.0 0.0\n0.0 1.0\n0 1\n1 2\n").unwrap();
        assert!(triangles(&mesh).is_empty());
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mesh =
            from_str("3\n0.0 0.0\n1.0 0.0\n0.0 1.0\n0 1\n1 0\n0 1\n1 2\n0 2\n").unwrap();
        let adj = adjacency(&mesh);
        assert_eq!(adj[&0], HashSet::from([1, 2]));
        assert_eq!(triangles(&mesh), HashSet::from([[0, 1, 2]]));
    }

    #[test]
    fn test_two_triangles_sharing_an_edge() {
        // square 0-1-2-3 split by the diagonal 0-2
        let input = "4\n0.0 0.0\n1.0 0.0\n1.0 1.0\n0.0 1.0\n0 1\n1 2\n2 3\n3 0\n0 2\n";
        let mesh = from_str(input).unwrap();
        assert_eq!(triangles(&mesh), HashSet::from([[0, 1, 2], [0, 2, 3]]));
    }

    #[test]
    fn test_idempotent() {
        let mesh = grid_mesh(4);
        assert_eq!(triangles(&mesh), triangles(&mesh));
    }

    #[test]
    fn test_grid_triangle_count() {
        // a k x k grid with one diagonal per cell has 2 (k-1)^2 triangles
        for k in 2..=5 {
            let mesh = grid_mesh(k);
            assert_eq!(
                triangles(&mesh).len(),
                2 * (k - 1) * (k - 1),
                "wrong triangle count for k={k}"
            );
        }
    }

    #[test]
    fn test_triples_are_canonical_and_closed() {
        for seed in 0..20 {
            let mesh = random_mesh(12, 30, seed);
            let adj = adjacency(&mesh);
            for [x, y, z] in triangles(&mesh) {
                assert!(x < y && y < z, "triple ({x}, {y}, {z}) is not sorted");
                assert!(z < mesh.node_count());
                // all three pairwise edges must exist
                assert!(adj[&x].contains(&y));
                assert!(adj[&y].contains(&z));
                assert!(adj[&x].contains(&z));
            }
        }
    }

    #[test]
    fn test_every_closed_edge_pair_is_found() {
        // brute force over all triples as the reference answer
        for seed in 0..10 {
            let mesh = random_mesh(10, 25, seed);
            let adj = adjacency(&mesh);
            let found = triangles(&mesh);
            let n = mesh.node_count();
            for x in 0..n {
                for y in x + 1..n {
                    for z in y + 1..n {
                        let closed = adj.get(&x).is_some_and(|s| s.contains(&y))
                            && adj.get(&y).is_some_and(|s| s.contains(&z))
                            && adj.get(&x).is_some_and(|s| s.contains(&z));
                        assert_eq!(
                            closed,
                            found.contains(&[x, y, z]),
                            "mismatch on ({x}, {y}, {z}), seed={seed}"
                        );
                    }
                }
            }
        }
    }
}
