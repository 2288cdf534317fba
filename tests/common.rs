//! Shared fixtures for driving the shell in tests

#![allow(dead_code)]

use gitcli::repl::{Repl, ReplParts};
use gitcli_core::config::GitCliConfig;
use gitcli_core::repository::{RepoError, RepoResult, Repository};
use gitcli_core::{AnsiRenderer, CaptureHandle, FileLineStore, LineStore, OsSystem};
use std::cell::RefCell;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// Repository double that records calls and answers from canned state.
#[derive(Clone, Default)]
pub struct FakeRepository {
    pub branch: Option<String>,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl FakeRepository {
    pub fn on_branch(branch: &str) -> Self {
        Self {
            branch: Some(branch.to_string()),
            calls: Rc::default(),
        }
    }

    pub fn outside_repository() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) -> RepoResult<()> {
        self.calls.borrow_mut().push(call);
        if self.branch.is_some() {
            Ok(())
        } else {
            Err(RepoError::NotARepository)
        }
    }
}

impl Repository for FakeRepository {
    fn current_branch(&self, _workdir: &Path) -> Option<String> {
        self.branch.clone()
    }

    fn init(&mut self, _workdir: &Path) -> RepoResult<String> {
        self.calls.borrow_mut().push("init".into());
        Ok("Initialized empty Git repository".into())
    }

    fn status(&self, _workdir: &Path) -> RepoResult<String> {
        self.record("status".into())?;
        Ok(format!(
            "=== Git Status ===\nBranch: {}\nWorking directory clean",
            self.branch.as_deref().unwrap_or_default()
        ))
    }

    fn stage(&mut self, _workdir: &Path, paths: &[String]) -> RepoResult<String> {
        self.record(format!("stage {}", paths.join(" ")))?;
        Ok("Added all files".into())
    }

    fn commit(&mut self, _workdir: &Path, message: &str) -> RepoResult<String> {
        self.record(format!("commit {message}"))?;
        Ok(format!("Committed: {message}\nSHA: abc1234"))
    }

    fn push(&mut self, _workdir: &Path) -> RepoResult<String> {
        self.record("push".into())?;
        Err(RepoError::CommandFailed {
            operation: "pushing",
            message: "no remote configured".into(),
        })
    }

    fn pull(&mut self, _workdir: &Path) -> RepoResult<String> {
        self.record("pull".into())?;
        Ok("Pulled from remote".into())
    }

    fn list_branches(&self, _workdir: &Path) -> RepoResult<String> {
        self.record("list_branches".into())?;
        Ok("Branches:\n* main".into())
    }

    fn create_branch(&mut self, _workdir: &Path, name: &str) -> RepoResult<String> {
        self.record(format!("create_branch {name}"))?;
        Ok(format!("Created branch: {name}"))
    }

    fn delete_branch(&mut self, _workdir: &Path, name: &str) -> RepoResult<String> {
        self.record(format!("delete_branch {name}"))?;
        Ok(format!("Deleted branch: {name}"))
    }

    fn checkout(&mut self, _workdir: &Path, name: &str) -> RepoResult<String> {
        self.record(format!("checkout {name}"))?;
        Ok(format!("Switched to branch: {name}"))
    }

    fn log(&self, _workdir: &Path, count: usize) -> RepoResult<String> {
        self.record(format!("log {count}"))?;
        Ok("No commits yet".into())
    }

    fn diff(&self, _workdir: &Path) -> RepoResult<String> {
        self.record("diff".into())?;
        Ok("No changes to show".into())
    }
}

/// A shell wired to temp-dir stores, a fake repository and a capture sink.
pub struct Harness {
    pub home: TempDir,
    pub work: TempDir,
    pub repository: FakeRepository,
    pub output: CaptureHandle,
    pub config: GitCliConfig,
}

impl Harness {
    pub fn new(repository: FakeRepository) -> Self {
        let mut config = GitCliConfig::default();
        config.ui.show_banner = false;
        Self {
            home: TempDir::new().expect("Failed to create home directory"),
            work: TempDir::new().expect("Failed to create work directory"),
            repository,
            output: CaptureHandle::default(),
            config,
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.home.path().join(".gitcli_history")
    }

    pub fn alias_path(&self) -> PathBuf {
        self.home.path().join(".gitcli_aliases")
    }

    pub fn repl(&mut self) -> Repl {
        let (renderer, output) = AnsiRenderer::capture();
        self.output = output;
        let history_store: Box<dyn LineStore> = Box::new(FileLineStore::new(self.history_path()));
        let alias_store: Box<dyn LineStore> = Box::new(FileLineStore::new(self.alias_path()));
        Repl::new(
            &self.config,
            ReplParts {
                history_store,
                alias_store,
                repository: Box::new(self.repository.clone()),
                system: Box::new(
                    OsSystem::new(self.work.path()).with_home(Some(self.home.path().to_path_buf())),
                ),
                renderer,
            },
        )
    }

    /// Run a fresh shell over `input` and return it for inspection.
    pub fn run(&mut self, input: &str) -> Repl {
        self.run_bytes(input.as_bytes())
    }

    /// Like [`Harness::run`] but over raw bytes that need not be UTF-8.
    pub fn run_bytes(&mut self, input: &[u8]) -> Repl {
        let mut repl = self.repl();
        repl.run(Cursor::new(input.to_vec()))
            .expect("Shell loop failed");
        repl
    }
}
