use crate::error::Error;
use crate::types::Mesh;
use dot::{Edges, GraphWalk, Labeller, Nodes};
use petgraph::visit::EdgeRef;
use std::fmt::Write;

type Node = usize;
type Edge = (usize, usize);

struct DotMesh<'a> {
    mesh: &'a Mesh,
}

impl<'a> Labeller<'a, Node, Edge> for DotMesh<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("mesh").unwrap()
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let p = self.mesh[petgraph::graph::NodeIndex::new(*n)];
        dot::LabelText::label(format!("{}\n{}", n, p))
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for DotMesh<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.mesh.node_count()).collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.mesh
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect::<Vec<_>>()
            .into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.0
    }

    fn target(&self, e: &Edge) -> Node {
        e.1
    }
}

/// Returns the mesh topology in DOT format, node labels carrying the
/// point index and coordinates. Intended for debugging with `neato`.
pub fn to_dot_str(mesh: &Mesh) -> String {
    let graph = DotMesh { mesh };
    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&graph, &mut buffer).unwrap();
    String::from_utf8(buffer.into_inner()).unwrap()
}

/// Writes the mesh back out in the input file format: the point count,
/// one `x y` line per point with three decimals (what the triangulation
/// program itself emits), then one `i j` line per edge.
pub fn to_input_str(mesh: &Mesh) -> String {
    let mut output = String::new();
    writeln!(output, "{}", mesh.node_count()).unwrap();
    for p in mesh.node_weights() {
        writeln!(output, "{:.3} {:.3}", p.x, p.y).unwrap();
    }
    for e in mesh.edge_references() {
        writeln!(output, "{} {}", e.source().index(), e.target().index()).unwrap();
    }
    output
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> Result<(), Error> {
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::from_str;

    #[test]
    fn test_dot_output() {
        let mesh = from_str("2\n0.0 0.0\n1.0 0.5\n0 1\n").unwrap();
        let dot = to_dot_str(&mesh);
        assert!(dot.contains("mesh {"), "{dot}");
        assert!(dot.contains("N0"));
        assert!(dot.contains("N1"));
        assert!(dot.contains("(1.000, 0.500)"));
    }

    #[test]
    fn test_input_round_trip() {
        let input = "3\n0.000 0.000\n1.500 0.000\n0.000 1.250\n0 1\n1 2\n0 2\n";
        let mesh = from_str(input).unwrap();
        assert_eq!(to_input_str(&mesh), input);

        let reparsed = from_str(&to_input_str(&mesh)).unwrap();
        assert_eq!(to_input_str(&reparsed), input);
    }
}
