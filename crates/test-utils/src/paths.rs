//! Temporary files for tests that touch the filesystem.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A fresh temporary directory, removed when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_temp_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write temp file");
    path
}

/// Save `image` as a PNG at `dir/name` and return the path.
pub fn write_temp_png(dir: &Path, name: &str, image: &image::RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("failed to write temp png");
    path
}

/// Names of all entries in `dir`, sorted.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("failed to read dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
