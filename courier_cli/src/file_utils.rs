use std::path::{Path, PathBuf};

/// Every file under `folder_path`, recursively, sorted.
pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

/// `dataset` itself when it is a file, otherwise the files under it with the given extension.
pub fn dataset_files(dataset: &Path, extension: &str) -> Result<Vec<PathBuf>, std::io::Error> {
    if dataset.is_file() {
        return Ok(vec![dataset.to_path_buf()]);
    }

    Ok(read_folder(dataset)?
        .into_iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == extension))
        .collect())
}
