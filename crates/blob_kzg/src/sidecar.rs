use crate::{
    kzg_to_versioned_hash, Blob, BlobRef, Context, Error, KZGCommitment, KZGProof,
    SerializationError, VersionedHash,
};

/// A blob together with what a network needs to accept it: its commitment,
/// a proof that the commitment matches the blob, and the hash that
/// transactions use to reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobSidecar {
    pub blob: Blob,
    pub commitment: KZGCommitment,
    pub proof: KZGProof,
    pub versioned_hash: VersionedHash,
}

/// Hands a sidecar to whatever carries it to the network.
///
/// Nothing in this crate implements it; transports live with the caller.
pub trait SidecarSubmitter {
    /// What the transport returns on success, e.g. a transaction hash.
    type Receipt;
    type Error;

    fn submit(&self, sidecar: &BlobSidecar) -> Result<Self::Receipt, Self::Error>;
}

impl Context {
    /// Builds a sidecar for `blob`, checking the blob proof before returning it.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn blob_sidecar(&self, blob: BlobRef) -> Result<BlobSidecar, Error> {
        let owned_blob: Blob = blob.to_vec().into_boxed_slice().try_into().map_err(
            |blob: Box<[u8]>| SerializationError::BlobHasInvalidLength { length: blob.len() },
        )?;

        let commitment = self.blob_to_kzg_commitment(blob)?;
        let proof = self.compute_blob_kzg_proof(blob, commitment)?;
        self.verify_blob_kzg_proof(blob, commitment, proof)?;

        Ok(BlobSidecar {
            blob: owned_blob,
            commitment,
            proof,
            versioned_hash: kzg_to_versioned_hash(&commitment),
        })
    }
}
