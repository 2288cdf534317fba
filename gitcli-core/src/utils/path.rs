//! Path helpers shared by configuration and the system collaborator

use std::path::{Component, Path, PathBuf};

/// Get the user's home directory path
pub fn home_dir() -> Option<PathBuf> {
    // Try standard environment variables
    if let Some(home) = std::env::var_os("HOME").filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(home));
    }

    // Try USERPROFILE on Windows
    if let Some(profile) = std::env::var_os("USERPROFILE").filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(profile));
    }

    dirs::home_dir()
}

/// Replace a leading `~` component with `home`.
///
/// Paths without a leading `~`, or with no home available, are returned as-is.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve `target` against `base` and normalise `.` and `..` lexically.
///
/// Symlinks are not followed; `..` at the root stays at the root.
pub fn resolve_lexically(base: &Path, target: &Path) -> PathBuf {
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        base.join(target)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if !at_root {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
