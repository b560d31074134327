use crate::algo::uniform::{BuilderConfig, build_with};
use crate::core::memory::estimate_tree_memory;
use anyhow::Context;
use std::io::Write;

pub struct SweepConfig {
    pub leading: Vec<usize>,
    pub start: usize,
    pub step: usize,
    pub end: usize,
    pub builder: BuilderConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            leading: vec![2],
            start: 500,
            step: 500,
            end: 20_500,
            builder: BuilderConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn vertex_counts(&self) -> Vec<usize> {
        let mut counts = self.leading.clone();
        if self.step > 0 {
            counts.extend((self.start..=self.end).step_by(self.step));
        }
        counts
    }
}

pub fn report_line(vertex_count: usize, elapsed_secs: f64) -> String {
    format!("Execution time for uniform weight with {vertex_count} nodes: {elapsed_secs} seconds")
}

pub fn run<W: Write>(cfg: &SweepConfig, out: &mut W) -> anyhow::Result<()> {
    let counts = cfg.vertex_counts();
    tracing::info!(points = counts.len(), tie_break = ?cfg.builder.tie_break, "sweep_start");

    for n in counts {
        let outcome = build_with(&cfg.builder, n)
            .with_context(|| format!("failed to build spanning tree with {n} nodes"))?;
        outcome
            .tree
            .validate()
            .with_context(|| format!("spanning tree with {n} nodes is malformed"))?;
        writeln!(out, "{}", report_line(n, outcome.elapsed_secs))
            .and_then(|_| out.flush())
            .with_context(|| format!("failed to report timing for {n} nodes"))?;

        let stats = estimate_tree_memory(&outcome.tree);
        tracing::debug!(
            nodes = n,
            edges = stats.edges,
            comparisons = outcome.comparisons,
            approx_bytes = stats.bytes,
            components = outcome.tree.component_count(),
            "data_point"
        );
    }

    tracing::info!("sweep_done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::uniform::TieBreak;
    use approx::assert_relative_eq;

    const PREFIX: &str = "Execution time for uniform weight with ";

    fn parse_line(line: &str) -> (usize, f64) {
        let rest = line.strip_prefix(PREFIX).unwrap();
        let (nodes, rest) = rest.split_once(" nodes: ").unwrap();
        let secs = rest.strip_suffix(" seconds").unwrap();
        (nodes.parse().unwrap(), secs.parse().unwrap())
    }

    fn small_sweep() -> SweepConfig {
        SweepConfig {
            leading: vec![2],
            start: 5,
            step: 5,
            end: 20,
            builder: BuilderConfig::default(),
        }
    }

    #[test]
    fn test_default_counts() {
        let counts = SweepConfig::default().vertex_counts();
        assert_eq!(42, counts.len());
        assert_eq!(2, counts[0]);
        assert_eq!(500, counts[1]);
        assert_eq!(20_500, counts[41]);
        assert!(counts[1..].iter().all(|n| n % 500 == 0));
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_step() {
        let cfg = SweepConfig {
            step: 0,
            ..small_sweep()
        };
        assert_eq!(vec![2], cfg.vertex_counts());
    }

    #[test]
    fn test_report_line() {
        assert_eq!(
            "Execution time for uniform weight with 2 nodes: 0.5 seconds",
            report_line(2, 0.5)
        );

        let (nodes, secs) = parse_line(&report_line(20_500, 0.000123));
        assert_eq!(20_500, nodes);
        assert_relative_eq!(0.000123, secs);
    }

    #[test]
    fn test_run_writes_line_per_count() {
        let cfg = small_sweep();
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(5, lines.len());

        let nodes = lines.iter().map(|l| parse_line(l)).collect::<Vec<_>>();
        assert_eq!(
            vec![2, 5, 10, 15, 20],
            nodes.iter().map(|(n, _)| *n).collect::<Vec<_>>()
        );
        assert!(nodes.iter().all(|(_, s)| *s >= 0.0 && s.is_finite()));
    }

    #[test]
    #[ignore = "runs the full default sweep"]
    fn test_run_default_sweep() {
        let mut out = Vec::new();
        run(&SweepConfig::default(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().map(parse_line).collect::<Vec<_>>();
        assert_eq!(42, lines.len());
        assert_eq!(
            SweepConfig::default().vertex_counts(),
            lines.iter().map(|(n, _)| *n).collect::<Vec<_>>()
        );
        assert!(lines.iter().all(|(_, s)| *s >= 0.0 && s.is_finite()));
    }

    #[test]
    fn test_run_shuffled() {
        let cfg = SweepConfig {
            builder: BuilderConfig {
                tie_break: TieBreak::Shuffled { seed: 7 },
            },
            ..small_sweep()
        };
        let mut out = Vec::new();
        run(&cfg, &mut out).unwrap();
        assert_eq!(5, String::from_utf8(out).unwrap().lines().count());
    }

    #[test]
    fn test_run_stops_on_invalid_count() {
        let cfg = SweepConfig {
            leading: vec![2, 0, 3],
            step: 0,
            ..small_sweep()
        };
        let mut out = Vec::new();
        let err = run(&cfg, &mut out).unwrap_err();

        assert!(err.to_string().contains("0 nodes"));
        let text = String::from_utf8(out).unwrap();
        assert_eq!(1, text.lines().count());
        assert!(text.starts_with("Execution time for uniform weight with 2 nodes: "));
    }
}
