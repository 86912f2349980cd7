use std::fmt;

pub use kzg_single_open::{ProverError, VerifierError};
pub use serialization::SerializationError;
pub use trusted_setup::Error as TrustedSetupError;

/// Top-level error type for committing, proving, verifying and (de)serializing.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Error encountered while committing to a blob or computing a proof.
    Prover(ProverError),
    /// Error encountered during verification of a proof.
    Verifier(VerifierError),
    /// Error encountered while (de)serializing blobs, scalars, or group elements.
    Serialization(SerializationError),
    /// The trusted setup does not match the blob size, or lacks `[τ]G₂`.
    IncompatibleTrustedSetup {
        /// Number of Lagrange points in the setup.
        lagrange_points: usize,
        /// Number of G2 points in the setup.
        g2_points: usize,
    },
}

impl Error {
    /// Returns true if a proof was well-formed but did not verify.
    pub const fn is_invalid_proof(&self) -> bool {
        matches!(self, Self::Verifier(VerifierError::InvalidProof))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prover(err) => write!(f, "prover error: {err:?}"),
            Self::Verifier(VerifierError::InvalidProof) => f.write_str("proof did not verify"),
            Self::Serialization(err) => write!(f, "malformed input: {err:?}"),
            Self::IncompatibleTrustedSetup {
                lagrange_points,
                g2_points,
            } => write!(
                f,
                "trusted setup has {lagrange_points} Lagrange points and {g2_points} G2 points"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl From<ProverError> for Error {
    fn from(value: ProverError) -> Self {
        Self::Prover(value)
    }
}

impl From<VerifierError> for Error {
    fn from(value: VerifierError) -> Self {
        Self::Verifier(value)
    }
}

impl From<SerializationError> for Error {
    fn from(value: SerializationError) -> Self {
        Self::Serialization(value)
    }
}
