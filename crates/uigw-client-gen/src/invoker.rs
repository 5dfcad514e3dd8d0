//! # Generation Invoker
//!
//! Runs `openapi-generator-cli` inside a container:
//!
//! ```text
//! docker run --rm -v <client>:/project -v <templates>:/templates
//!     -v <config>:/config.json [-v <host>:<container>]...
//!     openapitools/openapi-generator-cli:v7.3.0 generate -g python
//!     -t /templates -c /config.json -o /project -i <source> [--library asyncio]
//! ```
//!
//! The runtime binary and image can be overridden with `UIGW_DOCKER_BIN`
//! and `UIGW_GENERATOR_IMAGE`.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::GenerateError;
use crate::paths::GeneratorPaths;

pub const DEFAULT_DOCKER_BIN: &str = "docker";
pub const DEFAULT_IMAGE: &str = "openapitools/openapi-generator-cli:v7.3.0";
pub const DOCKER_BIN_ENV: &str = "UIGW_DOCKER_BIN";
pub const IMAGE_ENV: &str = "UIGW_GENERATOR_IMAGE";

/// Additional bind mounts, host path to container path. Ordered by host path.
pub type ExtraMounts = BTreeMap<PathBuf, String>;

/// Something that can turn an OpenAPI document into a client.
pub trait Generator {
    /// Generate from `source`, a location as seen from inside the generator.
    fn generate(
        &self,
        source: &str,
        extra_mounts: &ExtraMounts,
        asyncio: bool,
    ) -> Result<(), GenerateError>;
}

/// The container command line for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerInvocation<'a> {
    pub image: &'a str,
    pub paths: &'a GeneratorPaths,
    pub extra_mounts: &'a ExtraMounts,
    pub source: &'a str,
    pub asyncio: bool,
}

impl DockerInvocation<'_> {
    /// Arguments following the runtime binary.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["run".into(), "--rm".into()];
        push_mount(&mut args, &self.paths.client_dir, "/project");
        push_mount(&mut args, &self.paths.templates_dir, "/templates");
        push_mount(&mut args, &self.paths.config_path, "/config.json");
        for (host, container) in self.extra_mounts {
            push_mount(&mut args, host, container);
        }
        args.push(self.image.into());
        for flag in [
            "generate",
            "-g",
            "python",
            "-t",
            "/templates",
            "-c",
            "/config.json",
            "-o",
            "/project",
            "-i",
        ] {
            args.push(flag.into());
        }
        args.push(self.source.into());
        if self.asyncio {
            args.push("--library".into());
            args.push("asyncio".into());
        }
        args
    }
}

fn push_mount(args: &mut Vec<OsString>, host: &Path, container: &str) {
    let mut spec = host.as_os_str().to_os_string();
    spec.push(":");
    spec.push(container);
    args.push("-v".into());
    args.push(spec);
}

/// [`Generator`] backed by a container runtime process.
#[derive(Debug, Clone)]
pub struct DockerGenerator {
    program: String,
    image: String,
    paths: GeneratorPaths,
}

impl DockerGenerator {
    pub fn new(
        program: impl Into<String>,
        image: impl Into<String>,
        paths: GeneratorPaths,
    ) -> Self {
        Self {
            program: program.into(),
            image: image.into(),
            paths,
        }
    }

    /// Runtime binary and image from the environment, with defaults.
    pub fn from_env(paths: GeneratorPaths) -> Self {
        let program =
            std::env::var(DOCKER_BIN_ENV).unwrap_or_else(|_| DEFAULT_DOCKER_BIN.to_string());
        let image = std::env::var(IMAGE_ENV).unwrap_or_else(|_| DEFAULT_IMAGE.to_string());
        Self::new(program, image, paths)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

impl Generator for DockerGenerator {
    fn generate(
        &self,
        source: &str,
        extra_mounts: &ExtraMounts,
        asyncio: bool,
    ) -> Result<(), GenerateError> {
        let invocation = DockerInvocation {
            image: &self.image,
            paths: &self.paths,
            extra_mounts,
            source,
            asyncio,
        };
        let args = invocation.args();
        tracing::info!(program = %self.program, ?args, "running client generator");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| GenerateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            tracing::debug!(target: "generator", "{line}");
        }

        if !output.status.success() {
            return Err(GenerateError::ProcessFailure {
                code: output.status.code(),
            });
        }
        Ok(())
    }
}
