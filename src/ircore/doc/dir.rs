use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::io;

fn ignore(path: &Path) -> bool {
    if let Some(filename) = path.file_name() {
        //by default, ignore hidden files on unix like platforms
        if filename.to_string_lossy().starts_with(".") {
            return true;
        }
    }
    false
}

/// Expands `paths` into the files to submit. Directories are walked
/// breadth-first and their entries sorted by name; hidden entries are
/// skipped. Explicitly named files are kept as given.
pub fn collect_files(paths: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    let mut path_queue: VecDeque<PathBuf> = paths.iter().cloned().collect();
    while let Some(path) = path_queue.pop_front() {
        if path.is_dir() {
            log::debug!("{}...", path.display());
            let mut entries = vec![];
            for entry in path.read_dir()? {
                let entry_path = entry?.path();
                if ignore(&entry_path) {
                    log::info!("ignore {}", entry_path.display());
                } else {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            path_queue.extend(entries);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}
