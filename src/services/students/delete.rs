use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let regno = match storage.find_regno_by_id(id).await {
        Ok(Some(regno)) => regno,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to resolve regno for row {}: {}", id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "DB error",
                )),
            );
        }
    };

    match storage.delete_results_by_regno(&regno).await {
        Ok(rows) => {
            info!("Deleted {} row(s) for student {}", rows, regno);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student and all subjects deleted successfully",
            )))
        }
        Err(e) => {
            error!("Failed to delete student {}: {}", regno, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentDeleteFailed,
                    "Delete failed",
                )),
            )
        }
    }
}
