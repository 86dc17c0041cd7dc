use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;

use crate::config::UploadConfig;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::photo::original_extension;
use crate::utils::validate_magic_bytes;

/// 文本字段的最大字节数
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

/// 照片文件字段名
pub const PHOTO_FIELD: &str = "photo";

/// 已读入内存、尚未落盘的照片
#[derive(Debug, Clone)]
pub struct PendingPhoto {
    pub original_name: String,
    pub data: Vec<u8>,
}

/// 学生档案表单
///
/// 整个表单读完后再保存照片，文件名所需的学生姓名与字段顺序无关。
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub regno: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    pub photo: Option<PendingPhoto>,
}

fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

/// 读取学生档案 multipart 表单
///
/// 校验失败时返回可直接响应给客户端的 400。
pub async fn read_student_form(
    mut payload: Multipart,
    config: &UploadConfig,
) -> Result<StudentForm, HttpResponse> {
    let mut form = StudentForm::default();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Err(bad_request(
                    ErrorCode::BadRequest,
                    format!("Malformed multipart payload: {e}"),
                ));
            }
        };

        let Some(content_disposition) = field.content_disposition() else {
            continue;
        };
        let name = content_disposition
            .get_name()
            .unwrap_or_default()
            .to_string();
        let file_name = content_disposition.get_filename().map(|s| s.to_string());

        if name == PHOTO_FIELD {
            // 浏览器未选择文件时也会提交一个空文件名的部分
            let Some(original_name) = file_name.filter(|n| !n.is_empty()) else {
                continue;
            };

            if form.photo.is_some() {
                return Err(bad_request(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one photo can be uploaded at a time",
                ));
            }

            let extension = original_extension(&original_name).to_lowercase();
            if !config
                .allowed_types
                .iter()
                .any(|t| t.to_lowercase() == extension)
            {
                return Err(bad_request(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                ));
            }

            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|e| {
                    bad_request(ErrorCode::FileUploadFailed, format!("Photo read failed: {e}"))
                })?;
                if data.len() + chunk.len() > config.max_size {
                    return Err(bad_request(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    ));
                }
                data.extend_from_slice(&chunk);
            }

            if !validate_magic_bytes(&data, &extension) {
                return Err(bad_request(
                    ErrorCode::FileTypeNotAllowed,
                    "File content does not match its extension",
                ));
            }

            form.photo = Some(PendingPhoto {
                original_name,
                data,
            });
            continue;
        }

        let mut raw = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| {
                bad_request(ErrorCode::BadRequest, format!("Form field read failed: {e}"))
            })?;
            if raw.len() + chunk.len() > MAX_TEXT_FIELD_SIZE {
                return Err(bad_request(
                    ErrorCode::BadRequest,
                    format!("Form field '{name}' is too large"),
                ));
            }
            raw.extend_from_slice(&chunk);
        }
        let value = Some(String::from_utf8_lossy(&raw).into_owned());

        match name.as_str() {
            "regno" => form.regno = value,
            "name" => form.name = value,
            "department" => form.department = value,
            "year" => form.year = value,
            _ => {}
        }
    }

    Ok(form)
}
