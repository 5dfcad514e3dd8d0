//! Runs the `uigw-client-gen` binary against a shell-script container
//! runtime that records its arguments.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Mutex, MutexGuard, OnceLock};

use uigw_client_gen::invoker::{ExtraMounts, DOCKER_BIN_ENV, IMAGE_ENV};
use uigw_client_gen::{DockerGenerator, GenerateError, Generator, GeneratorPaths};

// Serialize environment mutations and stub spawning to avoid test races
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn serial() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("repo/tools/client_generator/templates")).unwrap();
        fs::write(dir.path().join("repo/tools/client_generator/config.json"), "{}").unwrap();
        fs::create_dir_all(dir.path().join("tmp")).unwrap();
        Self { dir }
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("repo")
    }

    fn tmp(&self) -> PathBuf {
        self.dir.path().join("tmp")
    }

    fn args_log(&self) -> PathBuf {
        self.dir.path().join("docker-args.log")
    }

    /// Executable that logs one argument per line and exits with `code`.
    fn docker_stub(&self, code: i32) -> PathBuf {
        let stub = self.dir.path().join("docker");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nexit {code}\n",
            self.args_log().display()
        );
        fs::write(&stub, script).unwrap();
        let mut perms = fs::metadata(&stub).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&stub, perms).unwrap();
        stub
    }

    fn logged_args(&self) -> Vec<String> {
        fs::read_to_string(self.args_log())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn run(&self, stub: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_uigw-client-gen"))
            .args(args)
            .arg("--project-root")
            .arg(self.root())
            .env(DOCKER_BIN_ENV, stub)
            .env_remove(IMAGE_ENV)
            .env("TMPDIR", self.tmp())
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_arguments_exit_one() {
    let _guard = serial();
    let sandbox = Sandbox::new();
    let stub = sandbox.docker_stub(0);

    let output = sandbox.run(&stub, &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(
        "Error: The argument '--file' is not provided, and there are no saved arguments."
    ));
    assert!(!sandbox.args_log().exists());
    assert!(!sandbox
        .root()
        .join("client/.openapi-generator/generator_args.json")
        .exists());
}

#[test]
fn remote_run_succeeds_and_saves_record() {
    let _guard = serial();
    let sandbox = Sandbox::new();
    let stub = sandbox.docker_stub(0);

    let output = sandbox.run(
        &stub,
        &["--file", "http://localhost:8080/openapi.json", "--asyncio"],
    );

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Successfully finished"));

    let args = sandbox.logged_args();
    assert_eq!(args[0], "run");
    assert!(args.contains(&"openapitools/openapi-generator-cli:v7.3.0".to_string()));
    assert_eq!(
        &args[args.len() - 4..],
        ["-i", "http://localhost:8080/openapi.json", "--library", "asyncio"]
    );

    let record = fs::read_to_string(
        sandbox
            .root()
            .join("client/.openapi-generator/generator_args.json"),
    )
    .unwrap();
    let record: serde_json::Value = serde_json::from_str(&record).unwrap();
    assert_eq!(
        record,
        serde_json::json!({"file": "http://localhost:8080/openapi.json", "asyncio": true})
    );
}

#[test]
fn failing_generator_exits_one_and_cleans_staging() {
    let _guard = serial();
    let sandbox = Sandbox::new();
    let stub = sandbox.docker_stub(2);
    let spec = sandbox.dir.path().join("spec.yaml");
    fs::write(&spec, "openapi: 3.1.0\n").unwrap();

    let output = sandbox.run(&stub, &["--file", spec.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("exit status 2"));
    assert!(!stdout(&output).contains("Successfully finished"));

    let args = sandbox.logged_args();
    assert!(args.contains(&"/openapi/openapi.yaml".to_string()));
    assert!(!args.contains(&"--library".to_string()));
    assert_eq!(fs::read_dir(sandbox.tmp()).unwrap().count(), 0);
}

#[test]
fn second_run_reuses_saved_arguments() {
    let _guard = serial();
    let sandbox = Sandbox::new();
    let stub = sandbox.docker_stub(0);
    let spec = sandbox.dir.path().join("spec.yaml");
    fs::write(&spec, "openapi: 3.1.0\n").unwrap();

    let first = sandbox.run(&stub, &["--file", spec.to_str().unwrap()]);
    assert_eq!(first.status.code(), Some(0), "stderr: {}", stderr(&first));
    let first_args = sandbox.logged_args();

    let second = sandbox.run(&stub, &[]);
    assert_eq!(second.status.code(), Some(0), "stderr: {}", stderr(&second));
    let second_args = sandbox.logged_args();

    // Staging directory names differ between runs; everything else matches.
    let strip = |args: &[String]| -> Vec<String> {
        args.iter()
            .filter(|a| !a.ends_with(":/openapi"))
            .cloned()
            .collect()
    };
    assert_eq!(strip(&first_args), strip(&second_args));
    assert_eq!(first_args.len(), second_args.len());
}

#[test]
fn generator_reads_overrides_from_environment() {
    let _guard = serial();
    let sandbox = Sandbox::new();
    let stub = sandbox.docker_stub(0);
    let paths = GeneratorPaths::from_root(&sandbox.root());

    let old_bin = std::env::var(DOCKER_BIN_ENV).ok();
    let old_image = std::env::var(IMAGE_ENV).ok();
    std::env::set_var(DOCKER_BIN_ENV, &stub);
    std::env::set_var(IMAGE_ENV, "registry.local/openapi-generator:test");
    let generator = DockerGenerator::from_env(paths);
    match old_bin {
        Some(v) => std::env::set_var(DOCKER_BIN_ENV, v),
        None => std::env::remove_var(DOCKER_BIN_ENV),
    }
    match old_image {
        Some(v) => std::env::set_var(IMAGE_ENV, v),
        None => std::env::remove_var(IMAGE_ENV),
    }

    assert_eq!(generator.program(), stub.to_str().unwrap());
    assert_eq!(generator.image(), "registry.local/openapi-generator:test");
    generator
        .generate("http://localhost/openapi.json", &ExtraMounts::new(), false)
        .unwrap();
    assert!(sandbox
        .logged_args()
        .contains(&"registry.local/openapi-generator:test".to_string()));
}

#[test]
fn nonzero_exit_maps_to_process_failure() {
    let _guard = serial();
    let sandbox = Sandbox::new();
    let stub = sandbox.docker_stub(2);
    let generator = DockerGenerator::new(
        stub.display().to_string(),
        "img",
        GeneratorPaths::from_root(&sandbox.root()),
    );

    let err = generator
        .generate("http://localhost/openapi.json", &ExtraMounts::new(), true)
        .unwrap_err();

    assert!(matches!(err, GenerateError::ProcessFailure { code: Some(2) }));
}
