//! Mesh generators for tests.

pub mod meshes;
