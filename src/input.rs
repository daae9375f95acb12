use crate::error::Error;
use crate::types::{Mesh, Point};
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};

/// Reads a mesh from a file emitted by a triangulation program.
///
/// Input format:
/// - one line with the point count N,
/// - N lines with two whitespace-separated floats each (the points,
///   indexed 0 to N-1 in order of appearance),
/// - any number of remaining lines with two whitespace-separated
///   integers each (the edges, as point indices).
///
/// Example input:
/// ```text
/// 4
/// 0.0 0.0
/// 1.0 0.0
/// 1.0 1.0
/// 0.0 1.0
/// 0 1
/// 1 2
/// 2 0
/// 2 3
/// 3 0
/// ```
///
/// Blank lines are skipped. Edge indices are validated against the point
/// count; duplicate edges are kept (they collapse later in the adjacency
/// map), self-loops are rejected.
pub fn from_file(path: &str) -> Result<Mesh, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    parse_mesh(reader)
}

/// This is equivalent to [`from_file`], but takes a string as the input.
pub fn from_str(input: &str) -> Result<Mesh, Error> {
    let cursor = Cursor::new(input);
    let reader = BufReader::new(cursor);
    parse_mesh(reader)
}

fn parse_mesh<R: BufRead>(reader: R) -> Result<Mesh, Error> {
    let mut mesh = Mesh::new_undirected();
    let mut count: Option<usize> = None;
    let mut nodes = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let lineno = lineno + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some(n) = count else {
            count = Some(parse_one(line, lineno, "point count")?);
            continue;
        };

        if nodes.len() < n {
            let (x, y) = parse_pair::<f64>(line, lineno, "point coordinates")?;
            nodes.push(mesh.add_node(Point::new(x, y)));
        } else {
            let (i, j) = parse_pair::<usize>(line, lineno, "edge indices")?;
            if i >= n || j >= n || i == j {
                return Err(Error::EdgeOutOfRange { edge: (i, j), points: n });
            }
            mesh.add_edge(nodes[i], nodes[j], ());
        }
    }

    let n = count.ok_or_else(|| Error::Parse {
        line: 1,
        what: "empty input, expected a point count".to_string(),
    })?;
    if nodes.len() < n {
        return Err(Error::Parse {
            line: 1,
            what: format!("expected {} points, input ended after {}", n, nodes.len()),
        });
    }

    Ok(mesh)
}

fn parse_one<T: std::str::FromStr>(line: &str, lineno: usize, what: &str) -> Result<T, Error> {
    let mut tokens = line.split_whitespace();
    let value = tokens.next().and_then(|t| t.parse().ok());
    match (value, tokens.next()) {
        (Some(v), None) => Ok(v),
        _ => Err(Error::Parse {
            line: lineno,
            what: format!("expected {what}, got \"{line}\""),
        }),
    }
}

fn parse_pair<T: std::str::FromStr>(
    line: &str,
    lineno: usize,
    what: &str,
) -> Result<(T, T), Error> {
    let mut tokens = line.split_whitespace();
    let a = tokens.next().and_then(|t| t.parse().ok());
    let b = tokens.next().and_then(|t| t.parse().ok());
    match (a, b, tokens.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(Error::Parse {
            line: lineno,
            what: format!("expected {what}, got \"{line}\""),
        }),
    }
}
