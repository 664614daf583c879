//! Command line interface error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Cli {
    /// Output format selector isn't fasta or fastq
    #[error("Output format '{0}' isn't supported, output format must be 'fasta' or 'fastq'")]
    UnknownOutputFormat(String),

    /// Read length bounds are inverted
    #[error("Minimal read length ({min}) is greater than maximal read length ({max})")]
    MinLengthGreaterThanMax { min: usize, max: usize },

    /// A read can't be longer than the reference it's sampled from
    #[error("Maximal read length ({max}) is greater than reference length ({reference})")]
    ReadLongerThanReference { max: usize, reference: usize },

    /// Reference can't be wrapped in empty lines
    #[error("Line width of reference fasta must be upper than 0")]
    LineWidthZero,

    /// Rayon global thread pool can't be configured
    #[error("We aren't able to build thread pool with {0} threads")]
    CantBuildThreadPool(usize),
}
