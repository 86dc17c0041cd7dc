use std::fs;
use std::path::Path;

use super::PendingPhoto;
use crate::config::UploadConfig;
use crate::errors::{ResultBoardError, Result};
use crate::utils::photo::{original_extension, photo_file_name};
use tracing::warn;

/// 将照片写入上传目录，返回存储的文件名
pub fn save_photo(
    config: &UploadConfig,
    student_name: Option<&str>,
    photo: &PendingPhoto,
) -> Result<String> {
    let upload_dir = Path::new(&config.dir);
    if !upload_dir.exists() {
        fs::create_dir_all(upload_dir).map_err(|e| {
            ResultBoardError::file_operation(format!("创建上传目录失败: {e}"))
        })?;
    }

    let file_name = photo_file_name(
        student_name,
        chrono::Utc::now().timestamp_millis(),
        &original_extension(&photo.original_name),
    );
    let file_path = upload_dir.join(&file_name);

    fs::write(&file_path, &photo.data).map_err(|e| {
        ResultBoardError::file_operation(format!(
            "写入照片失败 {}: {e}",
            file_path.display()
        ))
    })?;

    Ok(file_name)
}

/// 数据库写入失败后删除已保存的照片
pub fn discard_photo(config: &UploadConfig, file_name: &str) {
    let file_path = Path::new(&config.dir).join(file_name);
    if let Err(e) = fs::remove_file(&file_path) {
        warn!("删除照片失败 {}: {}", file_path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png() -> PendingPhoto {
        PendingPhoto {
            original_name: "me.png".into(),
            data: b"\x89PNG\r\n\x1a\n0000".to_vec(),
        }
    }

    #[test]
    fn test_discard_photo_removes_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = UploadConfig {
            dir: dir.path().to_string_lossy().into_owned(),
            max_size: 1024,
            allowed_types: vec![".png".into()],
        };

        let file_name = save_photo(&config, Some("Asha"), &png()).unwrap();
        assert!(dir.path().join(&file_name).exists());

        discard_photo(&config, &file_name);
        assert!(!dir.path().join(&file_name).exists());

        // 文件已不存在时只记录日志
        discard_photo(&config, &file_name);
    }
}
