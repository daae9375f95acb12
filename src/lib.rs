//! # tri_view
//!
//! A small library (and binary) for viewing 2D triangulation results:
//! it parses the point/edge files a triangulation program writes,
//! reconstructs the triangles implied by the edge set, computes their
//! circumscribed circles and renders everything as an SVG plot.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod circles;
pub mod error;
pub mod input;
pub mod output;
pub mod render;
pub mod testing;
pub mod triangles;
pub mod types;

pub use error::Error;
pub use types::Circle;
pub use types::Mesh;
pub use types::Point;
pub use types::Triangle;
