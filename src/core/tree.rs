use crate::core::ids::VertexId;
use crate::error::TreeDefect;

pub const ROOT: VertexId = 0;

// `from` is the endpoint that was visited first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone)]
pub struct SpanningTree {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(vertex_count.saturating_sub(1)),
        }
    }

    #[cfg(test)]
    pub fn from_edges(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    // out of range edges are ignored
    pub fn component_count(&self) -> usize {
        let mut dsu = DisjointSet::new(self.vertex_count);
        let mut components = self.vertex_count;
        for e in self.in_range_edges() {
            if dsu.union(e.from, e.to) {
                components -= 1;
            }
        }
        components
    }

    pub fn validate(&self) -> Result<(), TreeDefect> {
        let expected = self.vertex_count.saturating_sub(1);
        if self.edges.len() != expected {
            return Err(TreeDefect::EdgeCount {
                expected,
                found: self.edges.len(),
            });
        }

        let mut attached = vec![false; self.vertex_count];
        let mut dsu = DisjointSet::new(self.vertex_count);
        for &edge in &self.edges {
            if edge.from == edge.to {
                return Err(TreeDefect::SelfLoop(edge.from));
            }
            if !self.contains(edge.from) || !self.contains(edge.to) {
                return Err(TreeDefect::OutOfRange {
                    edge,
                    vertex_count: self.vertex_count,
                });
            }
            if edge.to == ROOT {
                return Err(TreeDefect::RootAttached(ROOT));
            }
            if attached[edge.to as usize] {
                return Err(TreeDefect::DuplicateParent(edge.to));
            }
            attached[edge.to as usize] = true;
            if !dsu.union(edge.from, edge.to) {
                return Err(TreeDefect::Cycle(edge));
            }
        }

        // n - 1 edges without a cycle always connect all n vertices
        Ok(())
    }

    fn contains(&self, v: VertexId) -> bool {
        (v as usize) < self.vertex_count
    }

    fn in_range_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| self.contains(e.from) && self.contains(e.to))
    }
}

struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).map(|v| v as u32).collect(),
            size: vec![1; size],
        }
    }

    fn find(&mut self, u: u32) -> u32 {
        let mut root = u;
        while root != self.parent[root as usize] {
            root = self.parent[root as usize];
        }
        let mut v = u;
        while v != root {
            let next = self.parent[v as usize];
            self.parent[v as usize] = root;
            v = next;
        }
        root
    }

    // false when `u` and `v` were already joined
    fn union(&mut self, u: u32, v: u32) -> bool {
        let ru = self.find(u) as usize;
        let rv = self.find(v) as usize;
        if ru == rv {
            return false;
        }
        if self.size[ru] > self.size[rv] {
            self.parent[rv] = ru as u32;
            self.size[ru] += self.size[rv];
        } else {
            self.parent[ru] = rv as u32;
            self.size[rv] += self.size[ru];
        }
        true
    }
}
