use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode, results::requests::CreateResultRequest};

pub async fn create_result(
    service: &ResultService,
    request: &HttpRequest,
    body: CreateResultRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_result(body).await {
        Ok(result) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            result,
            "Subject added successfully",
        ))),
        Err(e) => {
            error!("Failed to add subject: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ResultCreationFailed,
                    e.message(),
                )),
            )
        }
    }
}
