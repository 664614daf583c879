//! Random reference sequence

/* standard use */

/* crate use */
use rand::SeedableRng;

/* local use */

type Text = Box<[u8]>;

/// Store a reference sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub header: String,
    pub seq: Text,
}

impl Reference {
    /// Build a new reference
    pub fn new(header: String, seq: Text) -> Self {
        Self { header, seq }
    }

    /// Build a random reference of length base, each base is draw from rng
    pub fn random<R>(header: String, length: usize, rng: &mut R) -> Self
    where
        R: rand::Rng,
    {
        Self::new(header, crate::random_seq(length, rng).into_boxed_slice())
    }

    /// Length of reference
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Return true if reference contains no base
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Generate a random sequence of length base.
///
/// If seed is set, sequence depends only on seed, a fresh random generator is build for each call.
/// Otherwise random generator is seeded from entropy.
pub fn generate(length: usize, seed: Option<u64>) -> Vec<u8> {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_entropy(),
    };

    crate::random_seq(length, &mut rng)
}
