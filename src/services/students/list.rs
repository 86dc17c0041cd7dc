use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::students::entities::StudentSummary;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => {
            error!("Student list query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(Vec::<StudentSummary>::new()))
        }
    }
}
