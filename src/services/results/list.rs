use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResultService;
use crate::models::results::requests::ResultListParams;
use crate::models::results::responses::{DashboardRow, SubjectStanding};

pub async fn list_results(
    service: &ResultService,
    request: &HttpRequest,
    query: ResultListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let (subject, filter) = query.into_parts();

    // 指定科目时优先返回排名视图
    if let Some(subject) = subject {
        return match storage.list_subject_standings(&subject, filter).await {
            Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
            Err(e) => {
                error!("Subject standings query failed: {}", e);
                Ok(HttpResponse::InternalServerError().json(Vec::<SubjectStanding>::new()))
            }
        };
    }

    match storage.list_dashboard(filter).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            error!("Dashboard query failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(Vec::<DashboardRow>::new()))
        }
    }
}
