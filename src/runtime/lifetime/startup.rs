use crate::config::AppConfig;
use crate::errors::ResultBoardError;
use crate::storage::Storage;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 确保照片上传目录存在
fn ensure_upload_dir() {
    let upload_dir = &AppConfig::get().upload.dir;

    if Path::new(upload_dir).exists() {
        debug!("Upload directory {} already exists", upload_dir);
        return;
    }

    match std::fs::create_dir_all(upload_dir) {
        Ok(()) => warn!("Created upload directory {}", upload_dir),
        Err(e) => error!(
            "{}",
            ResultBoardError::file_operation(format!("创建上传目录 {upload_dir} 失败: {e}"))
                .format_colored()
        ),
    }
}

/// 准备服务器启动的上下文
/// 包括上传目录、数据库连接与迁移
pub async fn prepare_server_startup() -> StartupContext {
    ensure_upload_dir();

    let storage = match crate::storage::create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("{}", e.format_colored());
            panic!("Failed to create storage backend: {e}");
        }
    };
    warn!("Database connected and migrations completed");

    StartupContext { storage }
}
