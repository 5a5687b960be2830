use clap::Args;
use std::path::PathBuf;

/// Model configuration shared by every subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Model configuration (JSON)
    #[arg(short, long, default_value = "model.json")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct MutateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Genotype id to mutate
    #[arg(long)]
    pub id: usize,

    /// Locus to mutate (default: drawn uniformly)
    #[arg(short, long)]
    pub locus: Option<usize>,

    /// Override random seed (default: use configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of successive mutations to apply
    #[arg(short = 'n', long, default_value = "1")]
    pub steps: usize,
}
