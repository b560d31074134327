use crate::bench::sweep::{SweepConfig, run};
use crate::logging::{LogConfig, init_tracing};

pub mod algo;
pub mod bench;
pub mod core;
pub mod error;
pub mod logging;

fn main() -> anyhow::Result<()> {
    init_tracing(&LogConfig::default())?;

    let stdout = std::io::stdout();
    run(&SweepConfig::default(), &mut stdout.lock())
}
