//! Model to substitute base according to an error probability

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Model;

/// Substitute base by another base of alphabet with probability error_proba.
///
/// Base must be in alphabet, other base are rejected.
pub fn mutate<R>(base: u8, error_proba: f64, rng: &mut R) -> Result<u8>
where
    R: rand::Rng,
{
    if !crate::is_base(base) {
        anyhow::bail!(Model::BaseNotInAlphabet(base as char));
    }

    if rng.gen::<f64>() < error_proba {
        Ok(crate::random_base_diff(base, rng))
    } else {
        Ok(base)
    }
}
