//! Samples a blob and an evaluation point, produces the commitment, versioned
//! hash, opening proof and claimed value, and writes them as hex files.
//!
//! Environment:
//! - `BLOB_KZG_OUTPUT_DIR`: where the files go (default `files`).
//! - `BLOB_KZG_TRUSTED_SETUP`: path to an Ethereum trusted setup JSON. When
//!   unset, a setup is generated from a random secret, which is only good
//!   for local experiments.
//! - `RUST_LOG`: log filter (default `info`).

use std::{env, path::PathBuf, process::ExitCode};

use blob_kzg::{
    constants::FIELD_ELEMENTS_PER_BLOB, random_blob, random_scalar, store::write_artifacts,
    Context, TrustedSetup,
};
use bls12_381::Scalar;
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const OUTPUT_DIR_VAR: &str = "BLOB_KZG_OUTPUT_DIR";
const TRUSTED_SETUP_VAR: &str = "BLOB_KZG_TRUSTED_SETUP";
const DEFAULT_OUTPUT_DIR: &str = "files";

fn load_trusted_setup() -> Result<TrustedSetup, blob_kzg::TrustedSetupError> {
    if let Some(path) = env::var_os(TRUSTED_SETUP_VAR) {
        tracing::info!(path = %PathBuf::from(&path).display(), "loading trusted setup");
        return TrustedSetup::from_file(path);
    }

    tracing::warn!(
        "{TRUSTED_SETUP_VAR} is not set, generating an insecure trusted setup from a random secret"
    );
    let tau = Option::from(Scalar::from_bytes_be(&random_scalar()))
        .ok_or(blob_kzg::TrustedSetupError::DegenerateSecret)?;
    TrustedSetup::insecure_from_secret(tau, FIELD_ELEMENTS_PER_BLOB, 2)
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let output_dir =
        env::var_os(OUTPUT_DIR_VAR).map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from);

    let trusted_setup = match load_trusted_setup() {
        Ok(setup) => setup,
        Err(err) => {
            tracing::error!(error = ?err, "could not load trusted setup");
            return ExitCode::FAILURE;
        }
    };
    let ctx = match Context::new(&trusted_setup) {
        Ok(ctx) => ctx,
        Err(err) => {
            tracing::error!(error = ?err, "trusted setup cannot be used for blobs");
            return ExitCode::FAILURE;
        }
    };

    let blob = random_blob();
    let z = random_scalar();

    let artifacts = match ctx.produce_artifacts(&blob[..], z) {
        Ok(artifacts) => artifacts,
        Err(err) if err.is_integrity_fault() => {
            // A proof we just made does not verify: nothing produced here can be trusted.
            tracing::error!(%err, cause = %err.source, "self-verification failed, aborting");
            std::process::abort();
        }
        Err(err) => {
            tracing::error!(%err, cause = %err.source, "could not produce artifacts");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = write_artifacts(&output_dir, &blob[..], &z, &artifacts) {
        tracing::error!(error = ?err, "could not write artifacts");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        dir = %output_dir.display(),
        versioned_hash = %hex::encode(artifacts.versioned_hash),
        "artifacts written"
    );
    ExitCode::SUCCESS
}
