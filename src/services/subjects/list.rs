use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::common::numeric::non_empty;
use crate::models::subjects::{SubjectListParams, SubjectTitleItem};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
    query: SubjectListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subject_titles(non_empty(query.year)).await {
        Ok(subjects) => Ok(HttpResponse::Ok().json(subjects)),
        Err(e) => {
            error!("{}", e);
            Ok(HttpResponse::InternalServerError().json(Vec::<SubjectTitleItem>::new()))
        }
    }
}
