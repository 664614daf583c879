/* crate use */

/* module declaration */
pub mod cli;
pub mod error;
pub mod format;
pub mod model;
pub mod reference;
pub mod simulate;

/// Nucleotides a reference or a read can contain
pub const ALPHABET: [u8; 4] = [b'a', b't', b'c', b'g'];

/// Return true if nuc is in ALPHABET
pub fn is_base(nuc: u8) -> bool {
    ALPHABET.contains(&nuc)
}

/// Get a random base
pub fn random_base<R>(rng: &mut R) -> u8
where
    R: rand::Rng,
{
    ALPHABET[rng.gen_range(0..=3)]
}

/// Get a random base diffrent than nuc, nuc must be in ALPHABET
pub fn random_base_diff<R>(nuc: u8, rng: &mut R) -> u8
where
    R: rand::Rng,
{
    debug_assert!(is_base(nuc));

    loop {
        let idx = rng.gen_range(0..=3);

        if ALPHABET[idx] != nuc {
            return ALPHABET[idx];
        }
    }
}

/// Get random sequences
pub fn random_seq<R>(length: usize, rng: &mut R) -> Vec<u8>
where
    R: rand::Rng,
{
    (0..length).map(|_| random_base(rng)).collect()
}

#[cfg(test)]
mod t {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn alphabet() {
        let mut sorted = ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        assert_eq!(sorted.len(), 4);

        assert!(is_base(b'a'));
        assert!(is_base(b'g'));
        assert!(!is_base(b'A'));
        assert!(!is_base(b'n'));
    }

    #[test]
    fn random_base_() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let data: Vec<u8> = (0..1000).map(|_| random_base(&mut rng)).collect();

        assert!(data.iter().all(|n| is_base(*n)));
        for nuc in ALPHABET {
            assert!(data.contains(&nuc));
        }
    }

    #[test]
    fn random_base_diff_() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        for nuc in ALPHABET {
            let data: Vec<u8> = (0..300).map(|_| random_base_diff(nuc, &mut rng)).collect();

            assert!(!data.contains(&nuc));
            for other in ALPHABET.iter().filter(|x| **x != nuc) {
                assert!(data.contains(other));
            }
        }
    }

    #[test]
    fn random_seq_() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let first = random_seq(20, &mut rng);

        assert_eq!(first.len(), 20);
        assert!(first.iter().all(|n| is_base(*n)));

        rng = rand::rngs::StdRng::seed_from_u64(42);
        assert_eq!(first, random_seq(20, &mut rng));

        assert!(random_seq(0, &mut rng).is_empty());
    }
}
