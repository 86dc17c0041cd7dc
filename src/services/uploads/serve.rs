use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs;
use std::path::Path;

use super::UploadService;
use crate::errors::ResultBoardError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::photo::{get_mime_type, is_safe_file_name};

pub async fn serve_photo(
    service: &UploadService,
    request: &HttpRequest,
    file_name: String,
) -> ActixResult<HttpResponse> {
    let config = service.get_upload_config(request);

    if !is_safe_file_name(&file_name) {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        )));
    }

    let file_path = Path::new(&config.dir).join(&file_name);
    if !file_path.is_file() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        )));
    }

    let buf = match fs::read(&file_path) {
        Ok(buf) => buf,
        Err(e) => {
            tracing::error!("{}", ResultBoardError::file_operation(format!("{e}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File read failed",
                )),
            );
        }
    };

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, get_mime_type(&file_name)))
        .body(buf))
}
