//! Shared fixtures for the workflow tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use yu_adapters::{MemoryFilesystem, RecordingRunner};
use yu_core::prelude::*;

pub const ROOT: &str = "proj";

/// Collects reporter messages so tests can assert on them.
#[derive(Default)]
pub struct CapturedReporter {
    pub messages: Mutex<Vec<String>>,
}

impl CapturedReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Reporter for CapturedReporter {
    fn progress(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("OK {message}"));
    }
}

pub struct Harness {
    pub fs: MemoryFilesystem,
    pub runner: RecordingRunner,
    pub reporter: Arc<CapturedReporter>,
    pub service: ComposeService,
}

/// A compose service over `fs`, with every command recorded by `runner`.
pub fn compose(fs: MemoryFilesystem, runner: RecordingRunner) -> Harness {
    compose_with(fs, runner, ProjectSettings::default())
}

pub fn compose_with(
    fs: MemoryFilesystem,
    runner: RecordingRunner,
    settings: ProjectSettings,
) -> Harness {
    let reporter = Arc::new(CapturedReporter::default());
    let service = ComposeService::new(
        Box::new(runner.clone()),
        Box::new(fs.clone()),
        reporter.clone(),
        settings,
        ROOT,
    );
    Harness {
        fs,
        runner,
        reporter,
        service,
    }
}

/// `a` has a dependency manifest, `b` has a test entrypoint.
pub fn two_service_project() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file("proj/docker-compose.yml", "version: '2'\n")
        .with_file("proj/a/Gemfile", "source 'https://rubygems.org'\n")
        .with_executable("proj/b/bin/test", "#!/bin/sh\n")
}
