//! Model error

/* crate use */
use thiserror::Error;

/// Enum to manage error polymorphism
#[derive(Debug, Error)]
pub enum Model {
    /// Mutation is only defined for base of the alphabet
    #[error("Base '{0}' isn't in alphabet, base must be one of 'a', 't', 'c', 'g'")]
    BaseNotInAlphabet(char),

    /// Quality mean or standard deviation is NaN or infinite
    #[error("Quality mean and standard deviation must be finite")]
    QualityParamNotFinite,

    /// Quality standard deviation is negative
    #[error("Quality standard deviation must be upper or equal to 0")]
    QualityStdDevMustBePositive,
}
