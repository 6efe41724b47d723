//! Path utilities: expand ~ and place export files.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Explicit output path wins; otherwise the default name goes under
/// `export_dir` (or the current directory).
pub fn resolve_output(explicit: Option<&str>, export_dir: Option<&str>, default_name: &str) -> PathBuf {
    match explicit {
        Some(p) => expand_tilde(p),
        None => match export_dir {
            Some(dir) => expand_tilde(dir).join(default_name),
            None => PathBuf::from(default_name),
        },
    }
}
