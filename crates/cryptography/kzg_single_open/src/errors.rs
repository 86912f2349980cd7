/// Errors that can occur while committing to a polynomial or opening it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProverError {
    /// The multi-scalar multiplication for the commitment could not be computed.
    ///
    /// This happens when the commit key and the polynomial disagree on length.
    CommitmentFailed {
        /// Number of points in the commit key.
        num_points: usize,
        /// Number of evaluations in the polynomial.
        num_scalars: usize,
    },
    /// The multi-scalar multiplication for the quotient could not be computed.
    ProofComputationFailed {
        /// Number of points in the commit key.
        num_points: usize,
        /// Number of evaluations in the quotient.
        num_scalars: usize,
    },
}

/// Errors that can occur when verifying an opening proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing check failed.
    InvalidProof,
}
