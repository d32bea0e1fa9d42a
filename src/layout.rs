//! The boundary to the external diagram layout engine.
//!
//! Layout is pure post-processing: an engine reads a finished `ProcessGraph`
//! and returns coordinates for its shapes and waypoints for its flows. It never
//! changes the graph's topology, which is why it only gets a shared reference.

use crate::error::LayoutError;
use crate::graph::ProcessGraph;
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// Position and size of one node's shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Diagram information for a graph: shapes keyed by node id, waypoints keyed
/// by flow key (see `ProcessGraph::flow_key`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramLayout {
    pub shapes: AHashMap<String, Bounds>,
    pub edges: AHashMap<String, Vec<Point>>,
}

impl DiagramLayout {
    /// Checks that every shape and edge refers to an element of `graph`.
    pub fn verify(&self, graph: &ProcessGraph) -> Result<(), LayoutError> {
        if let Some(unknown) = self.shapes.keys().find(|id| !graph.contains_node(id)) {
            return Err(LayoutError::UnknownElement(unknown.clone()));
        }
        let flow_keys: AHashSet<String> = (0..graph.flows.len())
            .filter_map(|index| graph.flow_key(index))
            .collect();
        if let Some(unknown) = self.edges.keys().find(|key| !flow_keys.contains(key.as_str())) {
            return Err(LayoutError::UnknownElement(unknown.clone()));
        }
        Ok(())
    }
}

/// Implemented by the layout collaborator that assigns diagram coordinates.
pub trait LayoutEngine {
    fn layout(&self, graph: &ProcessGraph) -> Result<DiagramLayout, LayoutError>;
}

/// A compiled graph together with the diagram produced for it.
#[derive(Debug, Clone)]
pub struct LaidOutProcess {
    pub graph: ProcessGraph,
    pub layout: DiagramLayout,
}
