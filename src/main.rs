use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use treedb_fixtures::cli::{Cli, WorkloadKind};
use treedb_fixtures::fixture::{self, manifest::Manifest};
use treedb_fixtures::workload::split_tree::SplitTree;
use treedb_fixtures::workload::uniform::Uniform;
use treedb_fixtures::workload::Workload;

/// Initialize tracing subscriber for diagnostics on stderr.
/// Quiet by default so generation stays a files-only side effect;
/// --debug (or RUST_LOG) opts in.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if cli.verify {
        fixture::manifest::verify(&cli.dir)?;
        return Ok(());
    }

    let workload_def: Box<dyn Workload> = match cli.workload {
        WorkloadKind::SplitTree => Box::new(SplitTree),
        WorkloadKind::Uniform => Box::new(Uniform::new(cli.num_keys, cli.seed)),
    };

    let summaries = fixture::write_suite(&cli.dir, workload_def.as_ref())?;
    if cli.manifest {
        let manifest = Manifest::capture(&cli.dir, &summaries, workload_def.max_key())?;
        manifest.write(&cli.dir)?;
    }
    Ok(())
}
