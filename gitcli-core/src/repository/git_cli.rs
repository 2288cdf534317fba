//! [`Repository`] implementation that shells out to the `git` executable

use super::{RepoError, RepoResult, Repository, StatusSummary};
use crate::config::GitConfig;
use chrono::{DateTime, Local};
use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const FIELD_SEPARATOR: char = '\u{1f}';
const LOG_FORMAT: &str = "--format=%h%x1f%an%x1f%at%x1f%s";

/// Captured result of one git invocation.
#[derive(Debug)]
struct GitOutput {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl GitOutput {
    fn failure_message(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim().to_string()
        } else {
            stderr.to_string()
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    timeout: Option<Duration>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::from_config(&GitConfig::default())
    }
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &GitConfig) -> Self {
        Self::new(config.program.clone()).with_timeout(config.timeout())
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn spawn(
        &self,
        workdir: &Path,
        operation: &'static str,
        args: &[&str],
    ) -> RepoResult<GitOutput> {
        debug!(program = %self.program, ?args, workdir = %workdir.display(), "running git");

        let mut child = Command::new(&self.program)
            .arg("-C")
            .arg(workdir)
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(RepoError::Unavailable)?;

        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);
        let started = Instant::now();

        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    let expired = self.timeout.filter(|limit| started.elapsed() > *limit);
                    if let Some(limit) = expired {
                        let _ = child.kill();
                        let _ = child.wait();
                        warn!(operation, "git invocation timed out");
                        return Err(RepoError::TimedOut {
                            operation,
                            seconds: limit.as_secs(),
                        });
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(err) => return Err(RepoError::Unavailable(err)),
            }
        };

        Ok(GitOutput {
            status,
            stdout: join(stdout),
            stderr: join(stderr),
        })
    }

    /// Run git and map a non-zero exit to a [`RepoError`].
    fn run(&self, workdir: &Path, operation: &'static str, args: &[&str]) -> RepoResult<String> {
        let output = self.spawn(workdir, operation, args)?;
        if output.status.success() {
            return Ok(output.stdout);
        }
        let message = output.failure_message();
        if message.to_lowercase().contains("not a git repository") {
            return Err(RepoError::NotARepository);
        }
        Err(RepoError::CommandFailed { operation, message })
    }

    fn ensure_repository(&self, workdir: &Path) -> RepoResult<()> {
        let output = self.spawn(workdir, "opening repository", &["rev-parse", "--git-dir"])?;
        if output.status.success() {
            Ok(())
        } else {
            Err(RepoError::NotARepository)
        }
    }

    fn branch_or_detached(&self, workdir: &Path) -> String {
        self.current_branch(workdir)
            .unwrap_or_else(|| "(detached)".to_string())
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = pipe.read_to_end(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    })
}

fn join(handle: Option<thread::JoinHandle<String>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}

/// Render `git log` output produced with the unit-separated format.
pub fn render_log(raw: &str) -> String {
    let entries: Vec<String> = raw
        .lines()
        .filter_map(|line| {
            let mut fields = line.splitn(4, FIELD_SEPARATOR);
            let hash = fields.next()?;
            let author = fields.next()?;
            let timestamp = fields.next()?;
            let subject = fields.next().unwrap_or_default();
            let date = timestamp
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .map(|utc| {
                    utc.with_timezone(&Local)
                        .format("%a %b %e %H:%M:%S %Y")
                        .to_string()
                })
                .unwrap_or_else(|| timestamp.to_string());
            Some(format!(
                "Commit: {hash}\nAuthor: {author}\nDate: {date}\nMessage: {subject}"
            ))
        })
        .collect();

    if entries.is_empty() {
        return "No commits yet".to_string();
    }
    format!("=== Commit Log ===\n{}", entries.join("\n\n"))
}

/// First line of a commit message, used in confirmations.
fn subject_of(message: &str) -> &str {
    message.lines().next().unwrap_or_default().trim()
}

impl Repository for GitCli {
    fn current_branch(&self, workdir: &Path) -> Option<String> {
        // symbolic-ref also answers for an unborn branch in a fresh repository.
        let output = self
            .spawn(workdir, "reading branch", &["symbolic-ref", "--short", "-q", "HEAD"])
            .ok()?;
        if output.status.success() {
            let branch = output.stdout.trim();
            return (!branch.is_empty()).then(|| branch.to_string());
        }

        let detached = self
            .spawn(workdir, "reading branch", &["rev-parse", "--short", "HEAD"])
            .ok()?;
        if detached.status.success() {
            let hash = detached.stdout.trim();
            return (!hash.is_empty()).then(|| hash.to_string());
        }
        None
    }

    fn init(&mut self, workdir: &Path) -> RepoResult<String> {
        self.run(workdir, "initializing repository", &["init", "--quiet"])?;
        Ok("Initialized empty Git repository".to_string())
    }

    fn status(&self, workdir: &Path) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        let porcelain = self.run(workdir, "getting status", &["status", "--porcelain=v1"])?;
        let branch = self.branch_or_detached(workdir);
        Ok(StatusSummary::parse(&porcelain).render(&branch))
    }

    fn stage(&mut self, workdir: &Path, paths: &[String]) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        if paths.is_empty() || paths.iter().any(|path| path == ".") {
            self.run(workdir, "adding files", &["add", "-A"])?;
            return Ok("Added all files".to_string());
        }

        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run(workdir, "adding files", &args)?;
        Ok(paths
            .iter()
            .map(|path| format!("Added: {path}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn commit(&mut self, workdir: &Path, message: &str) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        self.run(workdir, "committing", &["commit", "--quiet", "-m", message])?;
        let sha = self.run(workdir, "committing", &["rev-parse", "--short=7", "HEAD"])?;
        Ok(format!(
            "Committed: {}\nSHA: {}",
            subject_of(message),
            sha.trim()
        ))
    }

    fn push(&mut self, workdir: &Path) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        self.run(workdir, "pushing", &["push", "--quiet"])?;
        Ok("Pushed to remote".to_string())
    }

    fn pull(&mut self, workdir: &Path) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        self.run(workdir, "pulling", &["pull", "--quiet"])?;
        Ok("Pulled from remote".to_string())
    }

    fn list_branches(&self, workdir: &Path) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        let raw = self.run(
            workdir,
            "listing branches",
            &["branch", "--list", "--format=%(HEAD)%(refname:short)"],
        )?;
        let mut lines = vec!["Branches:".to_string()];
        for line in raw.lines().filter(|line| !line.trim().is_empty()) {
            let (marker, name) = match line.strip_prefix('*') {
                Some(name) => ("* ", name),
                None => ("  ", line.trim_start()),
            };
            lines.push(format!("{marker}{name}"));
        }
        Ok(lines.join("\n"))
    }

    fn create_branch(&mut self, workdir: &Path, name: &str) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        self.run(workdir, "creating branch", &["branch", name])?;
        Ok(format!("Created branch: {name}"))
    }

    fn delete_branch(&mut self, workdir: &Path, name: &str) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        self.run(workdir, "deleting branch", &["branch", "-d", name])?;
        Ok(format!("Deleted branch: {name}"))
    }

    fn checkout(&mut self, workdir: &Path, name: &str) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        self.run(workdir, "checking out branch", &["checkout", "--quiet", name])?;
        Ok(format!("Switched to branch: {name}"))
    }

    fn log(&self, workdir: &Path, count: usize) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        // An unborn branch has no history; report it instead of git's error.
        if self
            .spawn(workdir, "showing log", &["rev-parse", "--verify", "-q", "HEAD"])?
            .status
            .success()
        {
            let count = count.to_string();
            let raw = self.run(workdir, "showing log", &["log", "-n", &count, LOG_FORMAT])?;
            Ok(render_log(&raw))
        } else {
            Ok(render_log(""))
        }
    }

    fn diff(&self, workdir: &Path) -> RepoResult<String> {
        self.ensure_repository(workdir)?;
        let porcelain = self.run(workdir, "showing diff", &["status", "--porcelain=v1"])?;
        Ok(StatusSummary::parse(&porcelain).render_changes())
    }
}
