//! Arbor core library: minimum spanning tree engines and batch comparison.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod instrument;
mod mst;
mod runner;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{BatchRunnerBuilder, ExecutionStrategy, ValidationPolicy},
    error::{ConfigError, ConfigErrorCode, MstError, MstErrorCode, Result},
    graph::{
        Adjacency, Edge, Graph, GraphIssue, GraphIssueCode, HalfEdge, NodeId, NodeIndex,
        inspect_graph,
    },
    mst::{Algorithm, DisjointSet, MstResult, kruskal_mst, prim_mst},
    runner::{BatchReport, BatchRunner, Comparison, GraphReport, InputStats},
};
