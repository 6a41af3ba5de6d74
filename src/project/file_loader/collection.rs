use std::path::{Path, PathBuf};

use crate::base::constants::Y_EXT;
use crate::project::Error;

/// Collect every `.y` file below `dir`, recursively, sorted by path.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    collect_recursive(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn collect_recursive(dir: &Path, results: &mut Vec<PathBuf>) -> Result<(), Error> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        if path.is_dir() {
            collect_recursive(&path, results)?;
        } else if path.is_file() && path.extension().is_some_and(|ext| ext == Y_EXT) {
            results.push(path);
        }
    }

    Ok(())
}
