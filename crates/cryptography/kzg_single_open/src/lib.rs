mod errors;
pub use errors::{ProverError, VerifierError};

pub mod evaluation;
pub mod prover;
pub mod verifier;
