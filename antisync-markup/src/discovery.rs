//! Source file discovery
//!
//! Expands a list of files and directories into the files to parse. Directories are walked
//! recursively in name order; every path is visited at most once even when the inputs overlap.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct FileSet {
    files: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
    skip_hidden: bool,
}

impl Default for FileSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSet {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            seen: HashSet::new(),
            skip_hidden: true,
        }
    }

    /// Whether names starting with `.` are skipped while walking directories.
    pub fn with_skip_hidden(mut self, skip_hidden: bool) -> Self {
        self.skip_hidden = skip_hidden;
        self
    }

    /// Add a file, or every file below a directory.
    pub fn add(&mut self, path: impl AsRef<Path>) -> io::Result<&mut Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            self.insert(path.to_path_buf());
            return Ok(self);
        }
        let skip_hidden = self.skip_hidden;
        let walker = WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !(skip_hidden && is_hidden(entry)));
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }
            let file = entry.into_path();
            if path == Path::new(".") {
                if let Ok(relative) = file.strip_prefix(".") {
                    self.insert(relative.to_path_buf());
                    continue;
                }
            }
            self.insert(file);
        }
        log::debug!("scanned {}", path.display());
        Ok(self)
    }

    fn insert(&mut self, file: PathBuf) {
        if self.seen.insert(file.clone()) {
            self.files.push(file);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.files
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
