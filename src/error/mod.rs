//! All stuff relate to error

/* crate use */
use thiserror::Error;

/* module declaration */
pub mod cli;
pub mod model;

/* reexport for easiest use */
pub use cli::Cli;
pub use model::Model;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Error {
    /// Error related to command line interface
    #[error(transparent)]
    Cli(#[from] Cli),

    /// Error related to model
    #[error(transparent)]
    Model(#[from] Model),
}

#[cfg(test)]
mod t {
    use super::*;

    #[test]
    fn message() {
        assert_eq!(
            "Output format 'genbank' isn't supported, output format must be 'fasta' or 'fastq'",
            format!("{}", Error::from(Cli::UnknownOutputFormat("genbank".to_string())))
        );
        assert_eq!(
            "Minimal read length (150) is greater than maximal read length (50)",
            format!(
                "{}",
                Error::from(Cli::MinLengthGreaterThanMax { min: 150, max: 50 })
            )
        );
        assert_eq!(
            "Base 'n' isn't in alphabet, base must be one of 'a', 't', 'c', 'g'",
            format!("{}", Error::from(Model::BaseNotInAlphabet('n')))
        );
    }
}
