//! Bounded raw-file generation.
//!
//! [`generate`] fills `FileConfig::raw_path` with [`crate::Record`]s until the
//! file is exactly `FileConfig::max_bytes` long. The write loop itself lives
//! in [`write_records`] and works against any [`tokio::io::AsyncWrite`], so it
//! can be exercised against in-memory pipes as well as files.

mod writer;

pub use writer::*;


use crate::{Error, FieldSource, FileConfig, Result, ThreadRandom};
use std::path::PathBuf;
use tokio::{fs::File, io::BufWriter};

/// Generates the raw file with thread-local randomness.
///
/// Any existing file at `config.raw_path` is truncated first. On success the
/// (absolute, when built through [`FileConfig::with_root`]) path is returned.
///
/// # Errors
///
/// Returns [`Error::SinkWrite`] if the file cannot be created, written or
/// flushed.
pub async fn generate(config: &FileConfig) -> Result<PathBuf> {
    generate_with(config, &ThreadRandom).await
}

/// Same as [`generate`], drawing fields from `source`.
///
/// # Errors
///
/// Returns [`Error::SinkWrite`] if the file cannot be created, written or
/// flushed.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(path = %config.raw_path.display())))]
pub async fn generate_with<S>(config: &FileConfig, source: &S) -> Result<PathBuf>
where
    S: FieldSource + ?Sized,
{
    #[cfg(feature = "tracing")]
    tracing::info!("Generating file at: {}", config.raw_path.display());

    let file = File::create(&config.raw_path)
        .await
        .map_err(Error::SinkWrite)?;
    let mut sink = BufWriter::new(file);

    let _size = write_records(&mut sink, source, config.max_bytes).await?;

    #[cfg(feature = "tracing")]
    tracing::info!("File generation complete. Final size: {} bytes", _size);

    Ok(config.raw_path.clone())
}
