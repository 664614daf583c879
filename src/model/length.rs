//! Model to get position and length of reads

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::error::Cli;

/// Struct to choose window of reference a read cover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    min: usize,
    max: usize,
}

impl Length {
    /// Create model from parameter
    pub fn new(min: usize, max: usize) -> Result<Length> {
        if min > max {
            anyhow::bail!(Cli::MinLengthGreaterThanMax { min, max });
        }

        Ok(Self { min, max })
    }

    /// Minimal length of read
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximal length of read
    pub fn max(&self) -> usize {
        self.max
    }

    /// Check a read of maximal length fit in a sequence of seq_len base
    pub fn check(&self, seq_len: usize) -> Result<()> {
        if self.max > seq_len {
            anyhow::bail!(Cli::ReadLongerThanReference {
                max: self.max,
                reference: seq_len,
            });
        }

        Ok(())
    }

    /// Get a window (start, end) of a sequence of length seq_len.
    ///
    /// Start is uniform in [0, seq_len], end is uniform in [start, seq_len], draw is repeat until window length is in [min, max].
    pub fn choose_window<RNG>(&self, seq_len: usize, rng: &mut RNG) -> Result<(usize, usize)>
    where
        RNG: rand::Rng,
    {
        self.check(seq_len)?;

        loop {
            let start = rng.gen_range(0..=seq_len);
            let end = rng.gen_range(start..=seq_len);

            if (self.min..=self.max).contains(&(end - start)) {
                return Ok((start, end));
            }
        }
    }
}
