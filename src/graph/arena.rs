//! Vertex storage shared by both graph orientations.

use std::collections::HashMap;

use crate::models::Vertex;

/// Vertices stored by index, with an id lookup table.
///
/// Indices are dense (`0..len`) and stable: vertices are never removed.
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexArena {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
}

impl VertexArena {
    /// Inserts `vertex` unless its id is already present. Returns its index
    /// and whether it was newly inserted.
    pub(crate) fn insert(&mut self, vertex: Vertex) -> (usize, bool) {
        if let Some(&idx) = self.index.get(vertex.id()) {
            return (idx, false);
        }
        let idx = self.vertices.len();
        self.index.insert(vertex.id().to_string(), idx);
        self.vertices.push(vertex);
        (idx, true)
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }
}
