//! Build a read from a window of reference

/* standard use */

/* crate use */
use anyhow::Result;

/* local use */
use crate::model;
use crate::model::quality::{qscore2char, qscore2proba};

type Seq = Vec<u8>;
type Quality = Vec<u8>;

/// A simulated read, qual[i] is the phred+33 quality of seq[i]
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub seq: Seq,
    pub qual: Quality,
}

impl Read {
    /// Build a new read
    pub fn new(seq: Seq, qual: Quality) -> Self {
        debug_assert_eq!(seq.len(), qual.len());

        Self { seq, qual }
    }

    /// Length of read
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Return true if read contains no base
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Generate a read from window, for each base a quality is draw and base is mutate with error probability associate to quality
pub fn synthesize<R>(window: &[u8], quality_model: &model::Quality, rng: &mut R) -> Result<Read>
where
    R: rand::Rng,
{
    let mut seq = Vec::with_capacity(window.len());
    let mut qual = Vec::with_capacity(window.len());

    for base in window {
        let qscore = quality_model.get_qscore(rng);

        seq.push(model::mutate(*base, qscore2proba(qscore), rng)?);
        qual.push(qscore2char(qscore));
    }

    Ok(Read::new(seq, qual))
}
