use anyhow::{Context, bail};
use clap::Parser;
use datagen::FileConfig;
use std::path::PathBuf;

/// Runtime configuration for the `datagen-server` binary.
///
/// All values are parsed from CLI arguments or environment variables. The
/// raw and output file names and the 10 MiB cap are fixed; only the
/// directory they are resolved against can be chosen.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "datagen-server",
    version,
    about = "An HTTP service that generates and processes synthetic data files"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Example: "0.0.0.0:3000" or "127.0.0.1:8080"
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:3000"))]
    pub server_addr: String,

    /// Application root holding `data.txt` and `output/processed.json`.
    ///
    /// Must be an existing directory. Relative paths are resolved against the
    /// working directory at startup.
    ///
    /// Environment variable: `DATA_ROOT`
    #[arg(long, env = "DATA_ROOT", default_value = ".")]
    pub data_root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub files: FileConfig,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.server_addr.trim().is_empty() {
            bail!("SERVER_ADDR must not be empty");
        }

        if !args.data_root.is_dir() {
            bail!(
                "DATA_ROOT ({}) is not an existing directory",
                args.data_root.display()
            );
        }

        let files = FileConfig::with_root(&args.data_root).with_context(|| {
            format!("failed to resolve DATA_ROOT ({})", args.data_root.display())
        })?;

        Ok(Self {
            server_addr: args.server_addr,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_against_working_directory() {
        let args = CliArgs::try_parse_from(["datagen-server"]).unwrap();
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.server_addr, "0.0.0.0:3000");
        assert!(config.files.raw_path.is_absolute());
        assert!(config.files.raw_path.ends_with("data.txt"));
        assert_eq!(config.files.max_bytes, datagen::MAX_FILE_SIZE);
    }

    #[test]
    fn flags_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let args = CliArgs::try_parse_from([
            "datagen-server",
            "--server-addr",
            "127.0.0.1:8080",
            "--data-root",
            root,
        ])
        .unwrap();
        let config = ServerConfig::try_from(args).unwrap();

        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.files.raw_path, dir.path().join("data.txt"));
        assert_eq!(
            config.files.output_path,
            dir.path().join("output").join("processed.json")
        );
    }

    #[test]
    fn missing_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let args = CliArgs::try_parse_from([
            "datagen-server",
            "--data-root",
            missing.to_str().unwrap(),
        ])
        .unwrap();

        assert!(ServerConfig::try_from(args).is_err());
    }

    #[test]
    fn empty_address_is_rejected() {
        let args = CliArgs::try_parse_from(["datagen-server", "--server-addr", ""]).unwrap();
        assert!(ServerConfig::try_from(args).is_err());
    }
}
