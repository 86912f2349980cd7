mod errors;
mod fiat_shamir;
mod pipeline;
mod prover;
mod sample;
mod sidecar;
pub mod store;
mod trusted_setup;
mod verifier;
mod versioned_hash;

/// Re-exported types
pub use errors::{Error, ProverError, SerializationError, TrustedSetupError, VerifierError};
pub use fiat_shamir::compute_challenge;
pub use pipeline::{ArtifactSet, PipelineError, Stage};
pub use sample::{random_blob, random_blob_with_rng, random_scalar, random_scalar_with_rng};
pub use serialization::{constants, types::*};
pub use sidecar::{BlobSidecar, SidecarSubmitter};
pub use crate::trusted_setup::TrustedSetup;
pub use versioned_hash::{kzg_to_versioned_hash, VERSIONED_HASH_VERSION_KZG};

/// A borrowed blob.
///
/// The length is checked on use, so anything byte-shaped can be passed in.
pub type BlobRef<'a> = &'a [u8];

/// Point at which a blob polynomial is opened, as a 32 byte big-endian scalar.
pub type KZGOpeningPoint = SerializedScalar;

/// The value of a blob polynomial at an opening point, as a 32 byte big-endian scalar.
pub type KZGOpeningEvaluation = SerializedScalar;

#[rustfmt::skip]
// Note: adding rustfmt::skip so that `cargo fmt` does not mix the
// public re-exported types with the following private imports.
use kzg_single_open::{prover::Prover, verifier::Verifier};
use serialization::constants::FIELD_ELEMENTS_PER_BLOB;
use crate::trusted_setup::{commit_key_from_setup, verification_key_from_setup};

/// Holds the keys derived from a trusted setup.
///
/// A context is immutable once built and can be shared across threads by
/// reference.
#[derive(Debug)]
pub struct Context {
    prover: Prover,
    verifier: Verifier,
}

impl Context {
    /// Builds a context for blobs of `FIELD_ELEMENTS_PER_BLOB` elements.
    ///
    /// Fails if the setup's Lagrange basis has a different size or the setup
    /// does not contain `[τ]G₂`.
    pub fn new(trusted_setup: &TrustedSetup) -> Result<Self, Error> {
        let incompatible = || Error::IncompatibleTrustedSetup {
            lagrange_points: trusted_setup.g1_lagrange.len(),
            g2_points: trusted_setup.g2_monomial.len(),
        };

        if trusted_setup.g1_lagrange.len() != FIELD_ELEMENTS_PER_BLOB {
            return Err(incompatible());
        }
        let verification_key = verification_key_from_setup(trusted_setup).ok_or_else(incompatible)?;

        Ok(Self {
            prover: Prover::new(
                FIELD_ELEMENTS_PER_BLOB,
                commit_key_from_setup(trusted_setup),
            ),
            verifier: Verifier::new(FIELD_ELEMENTS_PER_BLOB, verification_key),
        })
    }
}
