use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::uploads::{discard_photo, read_student_form, save_photo};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = service.uploads().get_upload_config(request);

    let form = match read_student_form(payload, &config).await {
        Ok(form) => form,
        Err(response) => return Ok(response),
    };

    let photo = match &form.photo {
        Some(photo) => match save_photo(&config, form.name.as_deref(), photo) {
            Ok(file_name) => {
                info!("Stored student photo {}", file_name);
                file_name
            }
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
        None => String::new(),
    };

    let storage = service.get_storage(request);
    let create = CreateStudentRequest {
        regno: form.regno,
        name: form.name,
        department: form.department,
        year: form.year,
        photo: photo.clone(),
    };

    match storage.create_student(create).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            student,
            "Student added successfully",
        ))),
        Err(e) => {
            error!("Failed to add student: {}", e);
            if !photo.is_empty() {
                discard_photo(&config, &photo);
            }
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    e.message(),
                )),
            )
        }
    }
}
