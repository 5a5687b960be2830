use crate::args::MutateArgs;
use crate::utils::{load_model, make_rng};
use anyhow::{Context, Result};
use parasim_sim::evolution::{mutate_at, mutate_random_locus};

pub fn mutate(args: &MutateArgs) -> Result<()> {
    let model = load_model(&args.config.config)?;
    let (mut rng, seed) = make_rng(args.seed, &model);
    log::info!("mutating with seed {seed}");

    let mut genotype = model
        .genotype(args.id)
        .with_context(|| format!("Failed to decode genotype {}", args.id))?;
    println!("Start: {}", genotype.with_id());

    for step in 1..=args.steps {
        let event = match args.locus {
            Some(locus) => mutate_at(&genotype, locus, model.registry(), &mut rng),
            None => mutate_random_locus(&genotype, model.registry(), &mut rng),
        }
        .with_context(|| format!("Mutation {step} failed"))?;

        println!("[{step}] {event}");
        genotype = event.genotype;
    }

    Ok(())
}
