use crate::core::tree::{Edge, SpanningTree};

pub struct MemoryStats {
    pub edges: usize,
    pub bytes: usize,
}

pub fn estimate_tree_memory(tree: &SpanningTree) -> MemoryStats {
    MemoryStats {
        edges: tree.edge_count(),
        bytes: tree.edge_count() * size_of::<Edge>(),
    }
}
