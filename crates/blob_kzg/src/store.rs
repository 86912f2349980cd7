//! Persists the artifacts of a run as hex text files, one value per file.
//!
//! A directory written by [`write_artifacts`] contains `blob`, `hash`, `x`,
//! `y`, `commitment` and `proof`, each holding lowercase hex without a `0x`
//! prefix or trailing newline.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    constants::{
        BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, BYTES_PER_VERSIONED_HASH,
    },
    ArtifactSet, Blob, KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
    VersionedHash,
};

const BLOB_FILE: &str = "blob";
const HASH_FILE: &str = "hash";
const POINT_FILE: &str = "x";
const CLAIM_FILE: &str = "y";
const COMMITMENT_FILE: &str = "commitment";
const PROOF_FILE: &str = "proof";

/// Errors that can occur while writing or reading an artifact directory.
#[derive(Debug)]
pub enum ArtifactError {
    /// The blob handed to [`write_artifacts`] is not `BYTES_PER_BLOB` bytes long.
    BlobHasInvalidLength { length: usize },
    /// Creating, writing or reading `path` failed.
    Io { path: PathBuf, source: io::Error },
    /// The file holds the wrong number of hex characters.
    InvalidLength {
        path: PathBuf,
        /// Expected number of hex characters.
        expected: usize,
        found: usize,
    },
    /// The file is not valid hexadecimal.
    InvalidHex {
        path: PathBuf,
        source: hex::FromHexError,
    },
}

/// The values of an artifact directory, decoded but not re-verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedArtifacts {
    pub blob: Blob,
    pub versioned_hash: VersionedHash,
    pub point: KZGOpeningPoint,
    pub claim: KZGOpeningEvaluation,
    pub commitment: KZGCommitment,
    pub proof: KZGProof,
}

/// Writes a blob, the point it was opened at and the resulting artifacts to `dir`.
///
/// `dir` is created if needed and existing files are overwritten. Nothing is
/// written if the blob has the wrong length.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(dir = %dir.as_ref().display())))]
pub fn write_artifacts(
    dir: impl AsRef<Path>,
    blob: &[u8],
    point: &KZGOpeningPoint,
    artifacts: &ArtifactSet,
) -> Result<(), ArtifactError> {
    if blob.len() != BYTES_PER_BLOB {
        return Err(ArtifactError::BlobHasInvalidLength { length: blob.len() });
    }

    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ArtifactError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let files: [(&str, &[u8]); 6] = [
        (BLOB_FILE, blob),
        (HASH_FILE, &artifacts.versioned_hash),
        (POINT_FILE, point),
        (CLAIM_FILE, &artifacts.claim),
        (COMMITMENT_FILE, &artifacts.commitment),
        (PROOF_FILE, &artifacts.proof),
    ];

    for (name, bytes) in files {
        let path = dir.join(name);
        fs::write(&path, hex::encode(bytes)).map_err(|source| ArtifactError::Io { path, source })?;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("wrote artifacts");

    Ok(())
}

/// Reads back a directory written by [`write_artifacts`].
///
/// Surrounding whitespace in a file is ignored.
pub fn read_artifacts(dir: impl AsRef<Path>) -> Result<PersistedArtifacts, ArtifactError> {
    let dir = dir.as_ref();

    let mut blob: Blob = vec![0u8; BYTES_PER_BLOB]
        .into_boxed_slice()
        .try_into()
        .expect("infallible: buffer was allocated with BYTES_PER_BLOB bytes");
    read_hex_file(&dir.join(BLOB_FILE), &mut blob[..])?;

    Ok(PersistedArtifacts {
        blob,
        versioned_hash: read_fixed::<BYTES_PER_VERSIONED_HASH>(&dir.join(HASH_FILE))?,
        point: read_fixed::<BYTES_PER_FIELD_ELEMENT>(&dir.join(POINT_FILE))?,
        claim: read_fixed::<BYTES_PER_FIELD_ELEMENT>(&dir.join(CLAIM_FILE))?,
        commitment: read_fixed::<BYTES_PER_COMMITMENT>(&dir.join(COMMITMENT_FILE))?,
        proof: read_fixed::<BYTES_PER_COMMITMENT>(&dir.join(PROOF_FILE))?,
    })
}

fn read_fixed<const N: usize>(path: &Path) -> Result<[u8; N], ArtifactError> {
    let mut bytes = [0u8; N];
    read_hex_file(path, &mut bytes)?;
    Ok(bytes)
}

/// Decodes the hex in `path` into `out`, which fixes the expected length.
fn read_hex_file(path: &Path, out: &mut [u8]) -> Result<(), ArtifactError> {
    let contents = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = contents.trim();

    let expected = out.len() * 2;
    if contents.len() != expected {
        return Err(ArtifactError::InvalidLength {
            path: path.to_path_buf(),
            expected,
            found: contents.len(),
        });
    }

    hex::decode_to_slice(contents, out).map_err(|source| ArtifactError::InvalidHex {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blob_kzg_store_{}_{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn sample_artifacts() -> ArtifactSet {
        ArtifactSet {
            versioned_hash: [0x01; 32],
            commitment: [0xc0; 48],
            proof: [0xa5; 48],
            claim: [0x07; 32],
        }
    }

    #[test]
    fn files_have_the_documented_names_and_lengths() {
        let dir = scratch_dir("layout");
        let blob = vec![0x3f; BYTES_PER_BLOB];
        write_artifacts(&dir, &blob, &[0x02; 32], &sample_artifacts()).expect("writable dir");

        for (name, hex_len) in [
            ("blob", 262_144),
            ("hash", 64),
            ("x", 64),
            ("y", 64),
            ("commitment", 96),
            ("proof", 96),
        ] {
            let contents = fs::read_to_string(dir.join(name)).expect("file was written");
            assert_eq!(contents.len(), hex_len, "{name}");
            assert!(!contents.starts_with("0x"));
            assert_eq!(contents, contents.to_lowercase());
        }
        assert_eq!(fs::read_to_string(dir.join("x")).unwrap(), "02".repeat(32));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn reads_back_what_was_written() {
        let dir = scratch_dir("round_trip");
        let blob = vec![0x11; BYTES_PER_BLOB];
        let artifacts = sample_artifacts();
        write_artifacts(&dir, &blob, &[0x02; 32], &artifacts).expect("writable dir");

        // Trailing newlines from hand edits are tolerated.
        let proof_path = dir.join("proof");
        let proof_hex = fs::read_to_string(&proof_path).unwrap();
        fs::write(&proof_path, format!("{proof_hex}\n")).unwrap();

        let read = read_artifacts(&dir).expect("valid artifact dir");
        assert_eq!(&read.blob[..], &blob[..]);
        assert_eq!(read.point, [0x02; 32]);
        assert_eq!(read.versioned_hash, artifacts.versioned_hash);
        assert_eq!(read.claim, artifacts.claim);
        assert_eq!(read.commitment, artifacts.commitment);
        assert_eq!(read.proof, artifacts.proof);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn short_blobs_are_rejected_before_touching_the_disk() {
        let dir = scratch_dir("short_blob");
        let blob = vec![0u8; BYTES_PER_BLOB - 1];

        assert!(matches!(
            write_artifacts(&dir, &blob, &[0; 32], &sample_artifacts()),
            Err(ArtifactError::BlobHasInvalidLength { length }) if length == BYTES_PER_BLOB - 1
        ));
        assert!(!dir.exists());
    }

    #[test]
    fn reports_bad_files() {
        let dir = scratch_dir("bad");
        write_artifacts(&dir, &vec![0u8; BYTES_PER_BLOB], &[0; 32], &sample_artifacts()).unwrap();

        fs::write(dir.join("y"), "00").unwrap();
        assert!(matches!(
            read_artifacts(&dir),
            Err(ArtifactError::InvalidLength {
                expected: 64,
                found: 2,
                ..
            })
        ));

        fs::write(dir.join("y"), "zz".repeat(32)).unwrap();
        assert!(matches!(
            read_artifacts(&dir),
            Err(ArtifactError::InvalidHex { .. })
        ));

        fs::remove_file(dir.join("y")).unwrap();
        match read_artifacts(&dir) {
            Err(ArtifactError::Io { path, .. }) => assert_eq!(path, dir.join("y")),
            other => panic!("unexpected result: {other:?}"),
        }

        fs::remove_dir_all(dir).unwrap();
    }
}
