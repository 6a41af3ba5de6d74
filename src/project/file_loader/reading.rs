//! Opening and reading source files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::project::Error;

/// An opened source file. Dropping it closes the handle.
#[derive(Debug)]
pub struct SourceFile {
    path: PathBuf,
    file: File,
}

/// Open `path`, checking that it names a regular file.
pub fn open(path: &Path) -> Result<SourceFile, Error> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let metadata = file.metadata().map_err(|e| Error::io(path, e))?;
    if !metadata.is_file() {
        return Err(Error::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(SourceFile {
        path: path.to_path_buf(),
        file,
    })
}

impl SourceFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file. The text must be valid UTF-8.
    pub fn read(mut self) -> Result<String, Error> {
        let mut text = String::new();
        self.file
            .read_to_string(&mut text)
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(text)
    }
}

/// Open and read `path` in one step.
pub fn load_file(path: &Path) -> Result<String, Error> {
    open(path)?.read()
}
