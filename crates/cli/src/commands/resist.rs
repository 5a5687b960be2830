use crate::utils::load_model;
use anyhow::{Context, Result};
use std::path::Path;

pub fn check_resistance(config: &Path, id: usize, therapy: usize) -> Result<()> {
    let model = load_model(config)?;
    let genotype = model
        .genotype(id)
        .with_context(|| format!("Failed to decode genotype {id}"))?;
    let resistant = model
        .resists(id, therapy)
        .with_context(|| format!("Failed to evaluate therapy {therapy}"))?;

    println!(
        "Genotype {} {} therapy {therapy}",
        genotype.with_id(),
        if resistant { "resists" } else { "does not resist" }
    );

    Ok(())
}
