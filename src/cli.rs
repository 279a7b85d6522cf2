//! CLI argument parsing for the fixture generator

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

///Which workload definition to generate
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WorkloadKind {
    ///The canonical deterministic split-tree suite
    SplitTree,
    ///Seeded uniform-random workload with the same file layout
    Uniform,
}

#[derive(Parser, Debug)]
#[command(name = "treedb_fixtures")]
#[command(version)]
#[command(about = "Generates command-script fixtures for the tree database test harness", long_about = None)]
pub struct Cli {
    /// Directory the fixture files are written to (must already exist)
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub dir: PathBuf,

    /// Workload to generate
    #[arg(long = "workload", value_enum, default_value = "split-tree")]
    pub workload: WorkloadKind,

    /// Number of keys in the queried half of the key space (uniform workload only)
    #[arg(long = "num-keys", value_name = "N", default_value = "4096")]
    pub num_keys: usize,

    /// RNG seed (uniform workload only)
    #[arg(long = "seed", default_value = "7")]
    pub seed: u64,

    /// Also write a manifest.bin describing the generated files
    #[arg(long = "manifest")]
    pub manifest: bool,

    /// Check an existing fixture set against its manifest.bin instead of generating
    #[arg(long = "verify")]
    pub verify: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
