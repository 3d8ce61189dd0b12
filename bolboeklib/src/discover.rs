//! Поиск входных файлов: только обычные файлы прямо в каталоге, без рекурсии.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Файлы из `dir`, имя которых оканчивается на `extension`, по имени.
pub fn discover_inputs(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        // символические ссылки разрешаются, битые пропускаются
        if !entry.path().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(extension) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
