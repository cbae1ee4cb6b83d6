pub mod graph;
pub mod shape;

pub use graph::{
    error::GraphError,
    traits::{Adjacencies, Graph},
    Edge, UndirectedGraph, WeightedGraph,
};
