use std::fmt;

use crate::{
    kzg_to_versioned_hash, BlobRef, Context, Error, KZGCommitment, KZGOpeningEvaluation,
    KZGOpeningPoint, KZGProof, VersionedHash,
};

/// Everything needed to prove on-chain that a blob's polynomial takes a
/// given value at a given point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub versioned_hash: VersionedHash,
    pub commitment: KZGCommitment,
    pub proof: KZGProof,
    /// The value of the blob polynomial at the requested point.
    pub claim: KZGOpeningEvaluation,
}

/// The steps of [`Context::produce_artifacts`], in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Commit,
    Hash,
    Open,
    Verify,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Commit => "commit",
            Self::Hash => "hash",
            Self::Open => "open",
            Self::Verify => "verify",
        };
        f.write_str(name)
    }
}

/// The first failure of an artifact run, tagged with the stage it happened in.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineError {
    pub stage: Stage,
    pub source: Error,
}

impl PipelineError {
    /// True when a freshly produced proof failed its own verification.
    ///
    /// This can only happen if the setup or the arithmetic is broken, so
    /// callers should stop rather than retry.
    pub const fn is_integrity_fault(&self) -> bool {
        matches!(self.stage, Stage::Verify) && self.source.is_invalid_proof()
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stage failed", self.stage)
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

trait AtStage<T> {
    fn at(self, stage: Stage) -> Result<T, PipelineError>;
}

impl<T> AtStage<T> for Result<T, Error> {
    fn at(self, stage: Stage) -> Result<T, PipelineError> {
        self.map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::error!(%stage, error = ?source, "artifact stage failed");
            PipelineError { stage, source }
        })
    }
}

impl Context {
    /// Commits to a blob, hashes the commitment, opens the blob at `z` and
    /// checks the opening before handing anything back.
    ///
    /// Either every artifact is returned or none is.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn produce_artifacts(
        &self,
        blob: BlobRef,
        z: KZGOpeningPoint,
    ) -> Result<ArtifactSet, PipelineError> {
        let commitment = self.blob_to_kzg_commitment(blob).at(Stage::Commit)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(commitment = %hex::encode(commitment), "committed to blob");

        let versioned_hash = kzg_to_versioned_hash(&commitment);
        #[cfg(feature = "tracing")]
        tracing::debug!(versioned_hash = %hex::encode(versioned_hash), "derived versioned hash");

        let (proof, claim) = self.compute_kzg_proof(blob, z).at(Stage::Open)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(claim = %hex::encode(claim), "opened blob");

        self.verify_kzg_proof(commitment, z, claim, proof)
            .at(Stage::Verify)?;
        #[cfg(feature = "tracing")]
        tracing::debug!("opening verified");

        Ok(ArtifactSet {
            versioned_hash,
            commitment,
            proof,
            claim,
        })
    }
}
