use anyhow::{Context, Result};
use parasim_sim::simulation::{Configuration, Model};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::path::Path;

/// Load and validate the model at `path`.
pub fn load_model(path: &Path) -> Result<Model> {
    let config = Configuration::from_path(path)
        .with_context(|| format!("Failed to load configuration {}", path.display()))?;
    config.build().context("Invalid model configuration")
}

/// RNG seeded from the command line, the configuration, or entropy.
pub fn make_rng(cli_seed: Option<u64>, model: &Model) -> (Xoshiro256PlusPlus, u64) {
    let seed = cli_seed.or(model.seed()).unwrap_or_else(rand::random);
    (Xoshiro256PlusPlus::seed_from_u64(seed), seed)
}
