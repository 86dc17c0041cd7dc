pub mod create;
pub mod delete;
pub mod list;
pub mod student;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::requests::{CreateResultRequest, ResultListParams, UpdateMarksRequest};
use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 带 subject 参数时返回单科排名，否则返回仪表盘
    pub async fn list_results(
        &self,
        request: &HttpRequest,
        query: ResultListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_results(self, request, query).await
    }

    // 单个学生的全部科目
    pub async fn list_student_subjects(
        &self,
        request: &HttpRequest,
        regno: String,
    ) -> ActixResult<HttpResponse> {
        student::list_student_subjects(self, request, regno).await
    }

    pub async fn create_result(
        &self,
        request: &HttpRequest,
        body: CreateResultRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_result(self, request, body).await
    }

    pub async fn update_marks(
        &self,
        request: &HttpRequest,
        id: i64,
        body: UpdateMarksRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_marks(self, request, id, body).await
    }

    pub async fn delete_result(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_result(self, request, id).await
    }
}
