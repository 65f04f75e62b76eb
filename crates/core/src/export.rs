use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::{error::Result, video_id::VideoId};

pub fn export_file_name(video_id: &VideoId) -> String {
    format!("yt_chapters_{}.txt", video_id)
}

/// Write the export text to `dir/yt_chapters_<id>.txt`, creating `dir` if needed.
pub async fn write_export(dir: &Path, video_id: &VideoId, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(export_file_name(video_id));
    fs::write(&path, text).await?;
    info!(path = %path.display(), "chapters exported");
    Ok(path)
}
