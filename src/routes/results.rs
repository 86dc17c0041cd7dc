use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::results::requests::{
    CreateResultRequest, ResultListParams, UpdateMarksRequest,
};
use crate::services::ResultService;
use crate::utils::{SafeIDI64, SafeRegno};

// 懒加载的全局 ResultService 实例
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn list_results(
    request: HttpRequest,
    query: web::Query<ResultListParams>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .list_results(&request, query.into_inner())
        .await
}

pub async fn list_student_subjects(
    request: HttpRequest,
    regno: SafeRegno,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .list_student_subjects(&request, regno.0)
        .await
}

pub async fn create_result(
    request: HttpRequest,
    body: web::Json<CreateResultRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .create_result(&request, body.into_inner())
        .await
}

pub async fn update_marks(
    request: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateMarksRequest>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .update_marks(&request, id.0, body.into_inner())
        .await
}

pub async fn delete_result(request: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.delete_result(&request, id.0).await
}

// 配置路由
pub fn configure_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/results")
            .route("", web::get().to(list_results))
            .route("", web::post().to(create_result))
            .route("/{regno}", web::get().to(list_student_subjects))
            .route("/{id}", web::put().to(update_marks))
            .route("/{id}", web::delete().to(delete_result)),
    );
}
