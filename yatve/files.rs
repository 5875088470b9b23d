use std::path::PathBuf;

use tracing::debug;
use yatve_engine::FileError;

pub async fn pick_open() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open File")
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

pub async fn pick_save() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Save File")
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

pub async fn read(path: PathBuf) -> Result<(PathBuf, String), FileError> {
    debug!(path = %path.display(), "reading");

    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok((path, text)),
        Err(error) => Err(FileError::read(path, &error)),
    }
}

pub async fn write(path: PathBuf, contents: String) -> Result<PathBuf, FileError> {
    debug!(path = %path.display(), bytes = contents.len(), "writing");

    match tokio::fs::write(&path, contents).await {
        Ok(()) => Ok(path),
        Err(error) => Err(FileError::write(path, &error)),
    }
}
