use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResultService;
use crate::models::{ApiResponse, ErrorCode, results::requests::UpdateMarksRequest};

pub async fn update_marks(
    service: &ResultService,
    request: &HttpRequest,
    id: i64,
    body: UpdateMarksRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_marks(id, body).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Marks updated successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ResultNotFound,
            "Subject not found",
        ))),
        Err(e) => {
            error!("Failed to update marks for row {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ResultUpdateFailed,
                    "Update failed",
                )),
            )
        }
    }
}
