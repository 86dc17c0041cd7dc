//! 学生照片上传与访问
//!
//! 照片随学生档案表单一起以 multipart 提交，保存到上传目录后仅在表中记录文件名。

pub mod form;
pub mod serve;
pub mod store;

pub use form::{PendingPhoto, StudentForm, read_student_form};
pub use store::{discard_photo, save_photo};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::config::{AppConfig, UploadConfig};

pub struct UploadService;

impl UploadService {
    pub fn new_lazy() -> Self {
        Self
    }

    /// 优先使用 app_data 中注入的上传配置，否则回退到全局配置
    pub(crate) fn get_upload_config(&self, request: &HttpRequest) -> UploadConfig {
        request
            .app_data::<web::Data<UploadConfig>>()
            .map(|config| config.get_ref().clone())
            .unwrap_or_else(|| AppConfig::get().upload.clone())
    }

    // 按文件名返回照片
    pub async fn serve_photo(
        &self,
        request: &HttpRequest,
        file_name: String,
    ) -> ActixResult<HttpResponse> {
        serve::serve_photo(self, request, file_name).await
    }
}
