//! Simulate reads

/* mod declaration */
pub mod read;

/* standard use */

/* crate use */
use anyhow::Result;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;

/* local use */
use crate::cli;
use crate::error::Cli;
use crate::format;
use crate::model;
use crate::reference::Reference;

pub use read::{synthesize, Read};

/// main simulate function
pub fn simulate(params: cli::Command) -> Result<()> {
    log::info!("Start init models");
    let length = model::Length::new(params.min_length, params.max_length)?;
    length.check(params.sequence_length)?;
    let quality = model::Quality::new(params.mean, params.std_dev)?;
    if params.line_width == 0 {
        anyhow::bail!(Cli::LineWidthZero);
    }
    log::debug!(
        "read length in [{}, {}], quality mean {} stdev {}",
        length.min(),
        length.max(),
        quality.mean(),
        quality.stdev()
    );
    log::info!("End init models");

    let mut main_rng = rand::rngs::StdRng::seed_from_u64(params.seed);

    log::info!("Start generate reference");
    let reference = Reference::random(
        params.header.clone(),
        params.sequence_length,
        &mut main_rng,
    );
    log::info!("End generate reference");

    if params.write_reference() {
        log::info!("Start write reference in {}", params.reference_path);
        format::save_reference(
            &params.reference_path,
            &reference.header,
            &reference.seq,
            params.line_width,
        )?;
        log::info!("End write reference");
    }

    log::info!("Start generate {} reads", params.n_reads);
    let reads = make_reads(
        &reference.seq,
        params.n_reads,
        &length,
        &quality,
        &mut main_rng,
    )?;
    log::info!("End generate reads");

    if params.write_reads() {
        log::info!(
            "Start write reads in {} as {}",
            params.reads_path,
            params.output_format
        );
        format::save_reads_as(&params.reads_path, &reads, params.output_format)?;
        log::info!("End write reads");
    }

    Ok(())
}

/// Generate n_reads reads from reference.
///
/// rng draw one seed per read, each read is build with its own generator in rayon global thread pool.
/// Reads are return in generation order.
pub fn make_reads<R>(
    reference: &[u8],
    n_reads: usize,
    length_model: &model::Length,
    quality_model: &model::Quality,
    rng: &mut R,
) -> Result<Vec<Read>>
where
    R: rand::Rng,
{
    length_model.check(reference.len())?;

    let seeds: Vec<u64> = (0..n_reads).map(|_| rng.gen::<u64>()).collect();

    seeds
        .par_iter()
        .map(|seed| {
            worker(
                reference,
                length_model,
                quality_model,
                rand::rngs::StdRng::seed_from_u64(*seed),
            )
        })
        .collect()
}

/// Function realy generate read
fn worker(
    reference: &[u8],
    length_model: &model::Length,
    quality_model: &model::Quality,
    mut rng: rand::rngs::StdRng,
) -> Result<Read> {
    let (start, end) = length_model.choose_window(reference.len(), &mut rng)?;

    log::debug!("read from {} to {}", start, end);

    synthesize(&reference[start..end], quality_model, &mut rng)
}
