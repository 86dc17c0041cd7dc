use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResultService;
use crate::models::results::entities::StudentResult;

pub async fn list_student_subjects(
    service: &ResultService,
    request: &HttpRequest,
    regno: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_student_subjects(&regno).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Student subject query failed for {}: {}", regno, e);
            Ok(HttpResponse::InternalServerError().json(Vec::<StudentResult>::new()))
        }
    }
}
