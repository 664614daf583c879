//! Model to generate qscore

/* standard use */

/* crate use */
use anyhow::Result;
use rand::distributions::Distribution;

/* local use */
use crate::error::Model;

/// Lowest quality score a base can get
pub const MIN_QSCORE: u8 = 0;

/// Highest quality score a base can get
pub const MAX_QSCORE: u8 = 40;

/// Phred+33 offset between a quality score and its ascii character
pub const PHRED_OFFSET: u8 = 33;

/// Struct to generate quality score of each base
#[derive(Debug)]
pub struct Quality {
    mean: f64,
    stdev: f64,
    dist: rand_distr::Normal<f64>,
}

impl Quality {
    /// Create model from parameter
    pub fn new(mean: f64, stdev: f64) -> Result<Quality> {
        if !mean.is_finite() || !stdev.is_finite() {
            anyhow::bail!(Model::QualityParamNotFinite);
        }

        if stdev < 0.0 {
            anyhow::bail!(Model::QualityStdDevMustBePositive);
        }

        let dist = rand_distr::Normal::new(mean, stdev)?;

        Ok(Self { mean, stdev, dist })
    }

    /// Mean of quality distribution
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of quality distribution
    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// Get a quality score from model.
    ///
    /// Value sample from normal distribution is truncate toward zero before being clamp in [MIN_QSCORE, MAX_QSCORE].
    pub fn get_qscore<RNG>(&self, rng: &mut RNG) -> u8
    where
        RNG: rand::Rng,
    {
        let raw = self.dist.sample(rng).trunc() as i64;

        raw.clamp(MIN_QSCORE as i64, MAX_QSCORE as i64) as u8
    }
}

/// Convert a quality score in error probability
pub fn qscore2proba(qscore: u8) -> f64 {
    10f64.powf(-(qscore as f64) / 10.0)
}

/// Convert a quality score in his phred+33 ascii character
pub fn qscore2char(qscore: u8) -> u8 {
    qscore + PHRED_OFFSET
}

/// Convert a phred+33 ascii character in quality score
pub fn char2qscore(qual: u8) -> u8 {
    qual - PHRED_OFFSET
}
