//! A throwaway project directory with fake `docker`, `docker-compose` and
//! `bundle` executables first on `PATH`.
//!
//! Every fake appends its command line to `calls.log`.  A fake exits 1 when
//! its arguments contain `FAKE_FAIL`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

const FAKE: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "$FAKE_LOG"
if [ -n "$FAKE_FAIL" ]; then
  case "$*" in
    *"$FAKE_FAIL"*) exit 1 ;;
  esac
fi
exit 0
"#;

pub struct Project {
    tmp: TempDir,
}

impl Project {
    /// An empty project with the fakes installed outside of it.
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("project")).unwrap();
        fs::create_dir(tmp.path().join("bin")).unwrap();
        for tool in ["docker", "docker-compose", "bundle"] {
            write_executable(&tmp.path().join("bin").join(tool), FAKE);
        }
        Self { tmp }
    }

    /// A project with a composition file.
    pub fn with_compose_file() -> Self {
        let project = Self::new();
        project.file("docker-compose.yml", "version: '2'\n");
        project
    }

    pub fn root(&self) -> PathBuf {
        self.tmp.path().join("project")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn file(&self, rel: &str, contents: &str) -> &Self {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
        self
    }

    pub fn executable(&self, rel: &str, contents: &str) -> &Self {
        self.file(rel, contents);
        write_executable(&self.path(rel), contents);
        self
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// Lines the fakes logged, in order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log())
            .unwrap_or_default()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// `yu` running in the project with the fakes on `PATH`.
    pub fn yu(&self) -> Command {
        let path = format!(
            "{}:{}",
            self.tmp.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        );
        let mut cmd = Command::cargo_bin("yu").unwrap();
        cmd.current_dir(self.root())
            .env("PATH", path)
            .env("FAKE_LOG", self.log())
            .env("NO_COLOR", "1")
            .env_remove("FAKE_FAIL")
            .env_remove("RUST_LOG");
        cmd
    }

    fn log(&self) -> PathBuf {
        self.tmp.path().join("calls.log")
    }
}

fn write_executable(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}
