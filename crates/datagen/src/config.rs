use std::path::{Path, PathBuf};

/// Byte cap applied to the raw file: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Name of the raw file under the application root.
pub const RAW_FILE_NAME: &str = "data.txt";

/// Directory (under the application root) holding the processed output.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Name of the processed JSON document inside [`OUTPUT_DIR_NAME`].
pub const OUTPUT_FILE_NAME: &str = "processed.json";

/// Where the raw and processed files live and how large the raw file gets.
///
/// Every operation takes the configuration explicitly, so tests can point
/// each run at its own directory instead of sharing global paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// File written by [`crate::generate`] and read by [`crate::process`].
    pub raw_path: PathBuf,
    /// JSON document written by [`crate::process`].
    pub output_path: PathBuf,
    /// Exact size of a generated raw file, in bytes.
    pub max_bytes: u64,
}

impl FileConfig {
    /// Builds the fixed layout under `root`.
    ///
    /// The root is made absolute against the current working directory so
    /// the paths handed back to callers are absolute as well.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if `root` is empty or the working directory
    /// cannot be resolved.
    pub fn with_root(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = std::path::absolute(root)?;
        Ok(Self {
            raw_path: root.join(RAW_FILE_NAME),
            output_path: root.join(OUTPUT_DIR_NAME).join(OUTPUT_FILE_NAME),
            max_bytes: MAX_FILE_SIZE,
        })
    }

    /// Replaces the byte cap.
    #[must_use]
    pub const fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_lays_out_fixed_paths() {
        let config = FileConfig::with_root("/srv/app").unwrap();
        assert_eq!(config.raw_path, PathBuf::from("/srv/app/data.txt"));
        assert_eq!(
            config.output_path,
            PathBuf::from("/srv/app/output/processed.json")
        );
        assert_eq!(config.max_bytes, 10_485_760);
    }

    #[test]
    fn relative_root_becomes_absolute() {
        let config = FileConfig::with_root("relative/root").unwrap();
        assert!(config.raw_path.is_absolute());
        assert!(config.output_path.is_absolute());
        assert!(config.raw_path.ends_with("relative/root/data.txt"));
    }

    #[test]
    fn empty_root_is_rejected() {
        assert!(FileConfig::with_root("").is_err());
    }

    #[test]
    fn with_max_bytes_overrides_cap() {
        let config = FileConfig::with_root("/srv/app").unwrap().with_max_bytes(64);
        assert_eq!(config.max_bytes, 64);
    }
}
