//! Basic graph representations.
//!
//! This module contains the validated adjacency-list graph and the branded
//! vertex ids handed out inside its ghost-token scope.

pub mod adjacency_graph;
pub mod vertex;

pub use adjacency_graph::{AdjacencyGraph, BrandedGraph};
pub use vertex::BrandedVertex;
