use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::uploads::{discard_photo, read_student_form, save_photo};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = service.uploads().get_upload_config(request);

    let form = match read_student_form(payload, &config).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    // 先解析原学号，再按原学号更新所有行；两步之间不加锁
    let old_regno = match storage.find_regno_by_id(id).await {
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
                    ErrorCode::StudentUpdateFailed,
                    "Update failed",
                )),
            );
        }
    };

    let photo = match &form.photo {
        Some(photo) => match save_photo(&config, form.name.as_deref(), photo) {
            Ok(file_name) => Some(file_name),
            Err(e) => {
                error!("{}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::FileUploadFailed,
                        "Photo upload failed",
                    )),
                );
            }
        },
        None => None,
    };

    let update = UpdateStudentRequest {
        regno: form.regno,
        name: form.name,
        department: form.department,
        year: form.year,
        photo: photo.clone(),
    };

    match storage.update_students_by_regno(&old_regno, update).await {
        Ok(rows) => {
            info!("Updated {} row(s) for student {}", rows, old_regno);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Student profile updated successfully",
            )))
        }
        Err(e) => {
            error!("Failed to update student {}: {}", old_regno, e);
            if let Some(file_name) = &photo {
                discard_photo(&config, file_name);
            }
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentUpdateFailed,
                    "Update failed",
                )),
            )
        }
    }
}
