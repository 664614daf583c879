//! Manage model

/* module declaration */
pub mod length;
pub mod mutation;
pub mod quality;

/* reexport for easiest use */
pub use length::Length;
pub use mutation::mutate;
pub use quality::Quality;
