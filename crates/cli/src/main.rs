mod args;
mod commands;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use args::{ConfigArgs, MutateArgs};
use commands::{inspect, mutate, resist};

/// Parasim: parasite genotype and drug-resistance toolkit
///
/// Inspects a genotype model: how genotypes are numbered, which drugs and
/// therapies they resist, and where point mutations lead.
#[derive(Parser, Debug)]
#[command(name = "parasim")]
#[command(author, version, about = "Inspects parasite genotype models", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the loci, drugs and therapies of a model.
    Info {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Decode a genotype id into its alleles.
    Decode {
        #[command(flatten)]
        config: ConfigArgs,

        /// Genotype id
        #[arg(long)]
        id: usize,
    },

    /// Encode allele indices (one per locus) into a genotype id.
    Encode {
        #[command(flatten)]
        config: ConfigArgs,

        /// Allele indices, comma separated (e.g. "1,0,2")
        #[arg(long, value_delimiter = ',', required = true)]
        alleles: Vec<usize>,
    },

    /// List genotypes, optionally only those resistant to a drug.
    List {
        #[command(flatten)]
        config: ConfigArgs,

        /// Only list genotypes resistant to this drug id
        #[arg(short, long)]
        drug: Option<usize>,
    },

    /// Check whether a genotype resists a therapy.
    Resist {
        #[command(flatten)]
        config: ConfigArgs,

        /// Genotype id
        #[arg(long)]
        id: usize,

        /// Therapy id
        #[arg(long)]
        therapy: usize,
    },

    /// Apply point mutations to a genotype.
    Mutate(Box<MutateArgs>),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Info { config } => {
            inspect::show_info(&config.config)?;
        }
        Commands::Decode { config, id } => {
            inspect::decode(&config.config, id)?;
        }
        Commands::Encode { config, alleles } => {
            inspect::encode(&config.config, &alleles)?;
        }
        Commands::List { config, drug } => {
            inspect::list(&config.config, drug)?;
        }
        Commands::Resist {
            config,
            id,
            therapy,
        } => {
            resist::check_resistance(&config.config, id, therapy)?;
        }
        Commands::Mutate(args) => {
            mutate::mutate(&args)?;
        }
    }

    Ok(())
}
