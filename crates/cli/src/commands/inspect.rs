use crate::printing::{print_genotype, print_model};
use crate::utils::load_model;
use anyhow::{Context, Result};
use std::path::Path;

pub fn show_info(config: &Path) -> Result<()> {
    let model = load_model(config)?;

    println!("\n📊 Model Information");
    println!("{}", "=".repeat(50));
    print_model(&model);

    Ok(())
}

pub fn decode(config: &Path, id: usize) -> Result<()> {
    let model = load_model(config)?;
    let genotype = model
        .genotype(id)
        .with_context(|| format!("Failed to decode genotype {id}"))?;

    print_genotype(&genotype);
    for drug in model.drugs() {
        let ec50 = genotype
            .get_ec50_power_n(drug, model.ec50())
            .context("Failed to read EC50")?;
        println!(
            "  • {}: EC50^n = {ec50:.4}{}",
            drug.name,
            if genotype.resist_to(drug) {
                " (resistant)"
            } else {
                ""
            }
        );
    }

    Ok(())
}

pub fn encode(config: &Path, alleles: &[usize]) -> Result<()> {
    let model = load_model(config)?;
    let genotype = model
        .registry()
        .get_or_create_from_alleles(alleles)
        .with_context(|| format!("Failed to encode alleles {alleles:?}"))?;

    println!("{}", genotype.with_id());

    Ok(())
}

pub fn list(config: &Path, drug: Option<usize>) -> Result<()> {
    let model = load_model(config)?;

    let genotypes = match drug {
        Some(d) => model
            .resistant_to(d)
            .with_context(|| format!("Failed to list genotypes resistant to drug {d}"))?,
        None => {
            model
                .registry()
                .populate()
                .context("Failed to build genotypes")?;
            model.registry().iter().cloned().collect()
        }
    };

    if genotypes.is_empty() {
        println!("No genotypes found.");
        return Ok(());
    }

    for genotype in &genotypes {
        println!("{}", genotype.with_id());
    }
    log::info!("listed {} genotypes", genotypes.len());

    Ok(())
}
