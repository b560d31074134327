use crate::core::ids::{VertexId, checked_vertex_count};
use crate::core::tree::{Edge, ROOT, SpanningTree};
use crate::error::BuildError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Instant;

const UNIFORM_WEIGHT: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    #[default]
    LowestId,
    Shuffled {
        seed: u64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    pub tie_break: TieBreak,
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub tree: SpanningTree,
    pub elapsed_secs: f64,
    pub comparisons: u64,
}

pub fn build(vertex_count: usize) -> Result<BuildOutcome, BuildError> {
    build_with(&BuilderConfig::default(), vertex_count)
}

/// Prim's algorithm on a complete graph with equal edge weights. Every visited vertex is
/// equally close, so each new vertex is attached to the smallest visited one, which is
/// always vertex 0.
pub fn build_with(cfg: &BuilderConfig, vertex_count: usize) -> Result<BuildOutcome, BuildError> {
    let start = Instant::now();
    let vertex_count = checked_vertex_count(vertex_count)?;
    let scan_order = scan_order(cfg.tie_break, vertex_count);

    let mut tree = SpanningTree::with_capacity(vertex_count);
    let mut visited = vec![false; vertex_count];
    visited[ROOT as usize] = true;
    let mut labels = vec![Some(UNIFORM_WEIGHT); vertex_count];
    labels[ROOT as usize] = None;
    let mut closest = ROOT;
    let mut comparisons = 0;

    while let Some(w) = select_min_label(&scan_order, &visited, &labels, &mut comparisons) {
        tree.push(Edge::new(closest, w));
        visited[w as usize] = true;
        closest = closest.min(w);
        // labels stay at the uniform weight, nothing to relax
    }

    let elapsed_secs = start.elapsed().as_secs_f64();
    tracing::trace!(
        vertex_count,
        edges = tree.edge_count(),
        comparisons,
        elapsed_secs,
        "uniform_build"
    );

    Ok(BuildOutcome {
        tree,
        elapsed_secs,
        comparisons,
    })
}

fn scan_order(tie_break: TieBreak, vertex_count: usize) -> Vec<VertexId> {
    let last = (vertex_count - 1) as VertexId;
    let mut order = (0..=last).collect::<Vec<VertexId>>();
    if let TieBreak::Shuffled { seed } = tie_break {
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);
    }
    order
}

fn select_min_label(
    scan_order: &[VertexId],
    visited: &[bool],
    labels: &[Option<u32>],
    comparisons: &mut u64,
) -> Option<VertexId> {
    let mut best: Option<(VertexId, u32)> = None;
    for &v in scan_order {
        if visited[v as usize] {
            continue;
        }
        let Some(label) = labels[v as usize] else {
            continue;
        };
        match best {
            None => best = Some((v, label)),
            Some((_, best_label)) => {
                *comparisons += 1;
                if label < best_label {
                    best = Some((v, label));
                }
            }
        }
    }
    best.map(|(v, _)| v)
}
