use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::system::HealthResponse;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 健康检查
    pub async fn health(&self) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok().json(HealthResponse {
            status: "Backend running successfully".to_string(),
        }))
    }
}
