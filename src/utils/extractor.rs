//! 路径参数提取器
//!
//! 解析失败时直接返回 400 JSON 响应，处理函数无需再校验。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path_param(message: String) -> actix_web::Error {
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 路径中的 `{id}`，必须是 i64
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(
            raw.trim()
                .parse::<i64>()
                .map(SafeIDI64)
                .map_err(|_| bad_path_param(format!("Invalid id: '{raw}'"))),
        )
    }
}

/// 路径中的 `{regno}`，非空字符串
#[derive(Debug, Clone)]
pub struct SafeRegno(pub String);

impl FromRequest for SafeRegno {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("regno").unwrap_or_default();
        if raw.is_empty() {
            return ready(Err(bad_path_param("Missing regno".to_string())));
        }
        ready(Ok(SafeRegno(raw.to_string())))
    }
}
