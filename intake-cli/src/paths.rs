//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "intake";
const APPLICATION: &str = "intake";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 10;

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for logs.
///
/// - Linux: `$XDG_CACHE_HOME/intake` or `~/.cache/intake`
/// - macOS: `~/Library/Caches/dev.intake.intake`
/// - Windows: `C:\Users\<User>\AppData\Local\intake\intake\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file. The logger is not
/// up yet, so failures are returned for the caller to log once it is.
pub fn rotate_logs() -> Vec<String> {
    let Some(cache) = cache_dir() else {
        return Vec::new();
    };
    rotate_logs_in(&cache)
}

fn rotate_logs_in(dir: &Path) -> Vec<String> {
    let mut problems = Vec::new();
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.log", timestamp));
        if let Err(e) = fs::rename(&latest, &archived) {
            problems.push(format!("Failed to archive {}: {}", latest.display(), e));
        }
    }
    problems.extend(cleanup_old_logs(dir));
    problems
}

/// Remove old log files, keeping only the most recent MAX_OLD_LOGS.
fn cleanup_old_logs(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Least recently modified first; unreadable mtimes sort ahead of all.
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    let excess = logs.len().saturating_sub(MAX_OLD_LOGS);
    logs.iter()
        .take(excess)
        .filter_map(|entry| {
            fs::remove_file(entry.path())
                .err()
                .map(|e| format!("Failed to remove {}: {}", entry.path().display(), e))
        })
        .collect()
}
