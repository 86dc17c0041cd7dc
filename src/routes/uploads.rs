use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::UploadService;
use crate::utils::photo::PHOTO_PUBLIC_PATH;

// 懒加载的全局 UploadService 实例
static UPLOAD_SERVICE: Lazy<UploadService> = Lazy::new(UploadService::new_lazy);

pub async fn serve_photo(
    request: HttpRequest,
    file_name: web::Path<String>,
) -> ActixResult<HttpResponse> {
    UPLOAD_SERVICE
        .serve_photo(&request, file_name.into_inner())
        .await
}

// 配置路由
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(PHOTO_PUBLIC_PATH).route("/{filename}", web::get().to(serve_photo)),
    );
}
