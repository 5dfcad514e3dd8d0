//! # CLI Orchestrator
//!
//! Resolves the effective arguments of a run and drives the generator.
//! Remote documents are passed through by URL; local files are copied into
//! a scoped temporary directory that is mounted at `/openapi` and removed
//! when the run ends, whether it succeeds or not.

use std::fs;
use std::path::Path;

use crate::error::GenerateError;
use crate::invoker::{ExtraMounts, Generator};
use crate::store::{ArgsStore, InvocationArgs};

/// Container mount point for a local source document.
pub const LOCAL_MOUNT: &str = "/openapi";
/// File name of the local source inside [`LOCAL_MOUNT`].
pub const LOCAL_FILE_NAME: &str = "openapi.yaml";

/// Arguments as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub file: Option<String>,
    pub asyncio: bool,
}

/// Fresh arguments are saved and win; otherwise the stored record is used.
///
/// The stored record is taken whole, so `--asyncio` without `--file` has no
/// effect when a record exists.
pub fn resolve_args(
    cli: &CliArgs,
    store: &dyn ArgsStore,
) -> Result<InvocationArgs, GenerateError> {
    if let Some(file) = &cli.file {
        let args = InvocationArgs::new(file.clone(), cli.asyncio);
        store.save(&args)?;
        return Ok(args);
    }
    if store.exists() {
        return Ok(store.load()?);
    }
    Err(GenerateError::MissingArguments)
}

/// True for `http://` and `https://` locations.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// One full generation run.
pub fn run(
    cli: &CliArgs,
    store: &dyn ArgsStore,
    generator: &dyn Generator,
    temp_root: &Path,
) -> Result<(), GenerateError> {
    let args = resolve_args(cli, store)?;
    let location = args.file.trim();

    if is_remote(location) {
        tracing::info!(
            url = location,
            asyncio = args.asyncio,
            "generating from remote document"
        );
        return generator.generate(location, &ExtraMounts::new(), args.asyncio);
    }

    tracing::info!(
        path = location,
        asyncio = args.asyncio,
        "generating from local document"
    );
    let staging = tempfile::Builder::new()
        .prefix("uigw-openapi-")
        .tempdir_in(temp_root)
        .map_err(|source| GenerateError::Io {
            context: format!(
                "failed to create temporary directory in {}",
                temp_root.display()
            ),
            source,
        })?;

    let staged = staging.path().join(LOCAL_FILE_NAME);
    fs::copy(location, &staged).map_err(|source| GenerateError::Io {
        context: format!("failed to copy {location}"),
        source,
    })?;

    let mut mounts = ExtraMounts::new();
    mounts.insert(staging.path().to_path_buf(), LOCAL_MOUNT.to_string());
    let source = format!("{LOCAL_MOUNT}/{LOCAL_FILE_NAME}");
    generator.generate(&source, &mounts, args.asyncio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryArgsStore;

    #[test]
    fn fresh_file_is_saved_and_returned() {
        let store = MemoryArgsStore::with_record(InvocationArgs::new("old.yaml", true));
        let cli = CliArgs {
            file: Some("new.yaml".to_string()),
            asyncio: false,
        };
        let args = resolve_args(&cli, &store).unwrap();
        assert_eq!(args, InvocationArgs::new("new.yaml", false));
        assert_eq!(store.record(), Some(args));
    }

    #[test]
    fn stored_record_used_whole_without_file() {
        let stored = InvocationArgs::new("old.yaml", false);
        let store = MemoryArgsStore::with_record(stored.clone());
        let cli = CliArgs {
            file: None,
            asyncio: true,
        };
        assert_eq!(resolve_args(&cli, &store).unwrap(), stored);
    }

    #[test]
    fn missing_everything_is_missing_arguments() {
        let store = MemoryArgsStore::new();
        let err = resolve_args(&CliArgs::default(), &store).unwrap_err();
        assert!(matches!(err, GenerateError::MissingArguments));
        assert!(store.record().is_none());
    }

    #[test]
    fn remote_classification() {
        assert!(is_remote("http://localhost:8080/openapi.json"));
        assert!(is_remote("https://example.org/openapi.yaml"));
        assert!(!is_remote("./spec.yaml"));
        assert!(!is_remote("/abs/http://odd"));
        assert!(!is_remote("HTTP://upper"));
    }
}
