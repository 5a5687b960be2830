use parasim_sim::genome::Genotype;
use parasim_sim::simulation::Model;
use parasim_sim::therapy::{Therapy, TherapyConfig};

pub fn print_model(model: &Model) {
    let info = model.info();

    println!("\n🧬 Loci");
    for (i, locus) in info.loci().iter().enumerate() {
        let alleles: Vec<&str> = locus.alleles.iter().map(|a| a.short_name.as_str()).collect();
        println!(
            "  • [{i}] {}: {} (weight {})",
            locus.name,
            alleles.join("/"),
            info.weights()[i]
        );
    }
    println!("  • Genotypes: {}", info.total_genotypes());

    println!("\n💊 Drugs");
    if model.drugs().is_empty() {
        println!("  • None");
    }
    for drug in model.drugs() {
        let markers: Vec<String> = drug
            .markers()
            .map(|(locus, alleles)| format!("{}{alleles:?}", info.loci()[locus].name))
            .collect();
        println!(
            "  • [{}] {} (n = {}) resisted by {}",
            drug.id,
            drug.name,
            drug.n,
            markers.join(", ")
        );
    }

    println!("\n📋 Therapies");
    if model.therapies().is_empty() {
        println!("  • None");
    }
    for therapy in model.therapies() {
        match therapy {
            TherapyConfig::Compound(t) => println!(
                "  • [{}] compound: drugs {:?}, {} days",
                t.id, t.drug_ids, t.dosing_days
            ),
            TherapyConfig::MultiCourse(t) => println!(
                "  • [{}] multi-course: courses {:?} starting on days {:?}",
                therapy.id(),
                t.therapy_ids,
                t.start_days
            ),
        }
    }

    match model.seed() {
        Some(seed) => println!("\n  • Random Seed: {seed} [--seed]"),
        None => println!("\n  • Random Seed: Random [--seed]"),
    }
}

pub fn print_genotype(genotype: &Genotype) {
    println!("Genotype: {}", genotype.with_id());
    println!("Alleles: {:?}", genotype.gene_expression());
    println!("Fitness multiplier: {:.4}", genotype.fitness_multiplier());
    println!(
        "Resistance position score: {}",
        genotype.resistance_position_score()
    );
}
