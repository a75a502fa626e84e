//! Classify, sort and serialize a raw file.
//!
//! [`process`] reads `FileConfig::raw_path`, turns every comma-separated token
//! into a [`ClassifiedItem`], orders the items by [`Category::rank`] and then
//! by [`natural_cmp`], and writes the resulting value to category mapping to
//! `FileConfig::output_path` as pretty-printed JSON.

mod category;
mod natural;
mod pipeline;

pub use category::*;
pub use natural::*;
pub use pipeline::*;

use crate::{Error, FileConfig, Result};
use std::io;
use std::path::PathBuf;
use tokio::fs;

/// What a successful [`process`] call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub output_path: PathBuf,
    /// Number of distinct values written.
    pub items: usize,
}

/// Processes the raw file into the JSON output document.
///
/// The output directory is created when missing and any existing output is
/// overwritten. Running this twice against an unchanged raw file produces
/// byte-identical output.
///
/// # Errors
///
/// - [`Error::SourceNotFound`] if the raw file does not exist.
/// - [`Error::SourceEmpty`] if it is empty or whitespace only. No output is
///   written in this case.
/// - [`Error::SourceRead`] if it cannot be read. Invalid UTF-8 is not an
///   error: offending bytes decode to U+FFFD and processing continues.
/// - [`Error::OutputWrite`] if the output cannot be written.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(path = %config.raw_path.display())))]
pub async fn process(config: &FileConfig) -> Result<ProcessOutcome> {
    #[cfg(feature = "tracing")]
    tracing::info!("Processing file: {}", config.raw_path.display());

    let bytes = match fs::read(&config.raw_path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SourceNotFound {
                path: config.raw_path.clone(),
            });
        }
        Err(e) => return Err(Error::SourceRead(e)),
    };
    let content = String::from_utf8_lossy(&bytes);

    if content.trim().is_empty() {
        return Err(Error::SourceEmpty {
            path: config.raw_path.clone(),
        });
    }

    let document = ProcessedDocument::from_content(&content)?;

    if let Some(dir) = config.output_path.parent() {
        fs::create_dir_all(dir).await.map_err(Error::OutputWrite)?;
    }
    fs::write(&config.output_path, document.json)
        .await
        .map_err(Error::OutputWrite)?;

    #[cfg(feature = "tracing")]
    tracing::info!(
        "Processing complete. Output saved to: {}",
        config.output_path.display()
    );

    Ok(ProcessOutcome {
        output_path: config.output_path.clone(),
        items: document.items,
    })
}
