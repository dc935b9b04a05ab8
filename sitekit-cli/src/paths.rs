//! Platform-specific directory paths.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "sitekit", "sitekit")
}

/// Default log file, `latest.log` in the cache directory.
///
/// - Linux: `$XDG_CACHE_HOME/sitekit` or `~/.cache/sitekit`
/// - macOS: `~/Library/Caches/dev.sitekit.sitekit`
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}
