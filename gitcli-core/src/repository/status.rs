//! Parsing and rendering of `git status --porcelain` output

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub index: char,
    pub worktree: char,
    pub path: String,
}

impl StatusEntry {
    fn parse(line: &str) -> Option<Self> {
        let mut chars = line.chars();
        let index = chars.next()?;
        let worktree = chars.next()?;
        let rest = chars.as_str().strip_prefix(' ')?;
        // Renames are reported as `old -> new`; keep the destination.
        let path = rest
            .rsplit_once(" -> ")
            .map_or(rest, |(_, to)| to)
            .trim_matches('"')
            .to_string();
        if path.is_empty() {
            return None;
        }
        Some(Self {
            index,
            worktree,
            path,
        })
    }

    fn is_untracked(&self) -> bool {
        self.index == '?' && self.worktree == '?'
    }

    fn is_staged(&self) -> bool {
        !self.is_untracked() && !matches!(self.index, ' ' | '!')
    }

    fn is_modified(&self) -> bool {
        !self.is_untracked() && matches!(self.worktree, 'M' | 'D' | 'T')
    }
}

/// Working tree state grouped the way the shell displays it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub staged: Vec<String>,
    pub modified: Vec<String>,
    pub untracked: Vec<String>,
}

impl StatusSummary {
    pub fn parse(porcelain: &str) -> Self {
        let mut summary = Self::default();
        for entry in porcelain.lines().filter_map(StatusEntry::parse) {
            if entry.is_untracked() {
                summary.untracked.push(entry.path);
                continue;
            }
            if entry.is_staged() {
                summary.staged.push(entry.path.clone());
            }
            if entry.is_modified() {
                summary.modified.push(entry.path);
            }
        }
        summary
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty() && self.untracked.is_empty()
    }

    /// Full status report headed by the branch name.
    pub fn render(&self, branch: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Git Status ===");
        let _ = write!(out, "Branch: {branch}");

        for (title, marker, files) in [
            ("Staged files", 'A', &self.staged),
            ("Modified files", 'M', &self.modified),
            ("Untracked files", '?', &self.untracked),
        ] {
            if files.is_empty() {
                continue;
            }
            let _ = write!(out, "\n\n{title}:");
            for file in files {
                let _ = write!(out, "\n  {marker} {file}");
            }
        }

        if self.is_clean() {
            let _ = write!(out, "\nWorking directory clean");
        }
        out
    }

    /// Short change listing used by `diff`.
    pub fn render_changes(&self) -> String {
        if self.modified.is_empty() && self.staged.is_empty() {
            return "No changes to show".to_string();
        }
        let mut lines = vec!["=== Changes ===".to_string()];
        lines.extend(self.modified.iter().map(|file| format!("Modified: {file}")));
        lines.extend(self.staged.iter().map(|file| format!("Added: {file}")));
        lines.join("\n")
    }
}
