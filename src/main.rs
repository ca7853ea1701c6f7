use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Cli;
use dirtree::core::telemetry::logging::init_logging;
use dirtree::services::tree::{banner, TreeRenderer};
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    tracing::debug!(path = %cli.path.display(), max_level = cli.max_level, "starting");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}\n", banner(cli.max_level))?;

    let result = TreeRenderer::new(cli.max_level).render(&cli.path, &mut out);
    // Whatever was printed before a failure stays visible.
    out.flush()?;
    result.with_context(|| format!("failed to render tree for {}", cli.path.display()))?;
    Ok(())
}
