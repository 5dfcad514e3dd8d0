//! Host locations the generator reads from and writes to.

use std::path::{Path, PathBuf};

/// Directory, relative to the project root, holding the generator's
/// templates and configuration.
pub const TOOL_DIR: &str = "tools/client_generator";

/// Fixed host paths derived from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPaths {
    /// Output directory, mounted at `/project`.
    pub client_dir: PathBuf,
    /// Mustache template overrides, mounted at `/templates`.
    pub templates_dir: PathBuf,
    /// Generator configuration, mounted at `/config.json`.
    pub config_path: PathBuf,
    /// Stored arguments of the last run.
    pub args_file: PathBuf,
    /// Parent directory for the scoped copy of a local source document.
    pub temp_root: PathBuf,
}

impl GeneratorPaths {
    pub fn from_root(root: &Path) -> Self {
        let client_dir = root.join("client");
        let tool_dir = root.join(TOOL_DIR);
        Self {
            args_file: client_dir
                .join(".openapi-generator")
                .join("generator_args.json"),
            client_dir,
            templates_dir: tool_dir.join("templates"),
            config_path: tool_dir.join("config.json"),
            temp_root: std::env::temp_dir(),
        }
    }

    pub fn with_temp_root(mut self, temp_root: impl Into<PathBuf>) -> Self {
        self.temp_root = temp_root.into();
        self
    }
}

/// Walk up from `start` to the nearest directory containing [`TOOL_DIR`].
pub fn discover_project_root(start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join(TOOL_DIR).is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Project root: the explicit override, else the discovered root, else `cwd`.
///
/// A relative override is joined onto `cwd`; container bind mounts need
/// absolute host paths.
pub fn resolve_project_root(explicit: Option<PathBuf>, cwd: &Path) -> PathBuf {
    if let Some(root) = explicit {
        if root.is_relative() {
            return cwd.join(root).components().collect();
        }
        return root;
    }
    discover_project_root(cwd).unwrap_or_else(|| {
        tracing::warn!(
            cwd = %cwd.display(),
            "could not locate {TOOL_DIR}; using current directory as project root"
        );
        cwd.to_path_buf()
    })
}
