use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively collect every file under `root` whose name ends with `suffix`.
///
/// Results are sorted so that scans are reproducible across platforms.
/// Entries that cannot be read are logged and skipped.
pub fn collect_files_with_suffix(root: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {e}", root.display());
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(suffix))
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// Names of the immediate subdirectories of `dir`.
pub fn list_subdirectory_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
