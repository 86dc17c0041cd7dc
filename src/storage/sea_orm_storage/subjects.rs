//! 科目列表与聚合查询

use super::SeaOrmStorage;
use crate::entity::student_results::{Column, Entity as StudentResults, Model};
use crate::errors::{ResultBoardError, Result};
use crate::models::{
    results::{
        grading::{MarkRow, rank_subject_standings, summarize_dashboard},
        requests::ResultFilter,
        responses::{DashboardRow, SubjectStanding},
    },
    subjects::SubjectTitleItem,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

impl From<Model> for MarkRow {
    fn from(model: Model) -> Self {
        MarkRow {
            regno: model.regno,
            name: model.name,
            year: model.year,
            photo: model.photo,
            total: model.total,
            result: model.result,
        }
    }
}

/// 年级 / 学期过滤，None 表示不限制
fn apply_filter(mut select: Select<StudentResults>, filter: &ResultFilter) -> Select<StudentResults> {
    if let Some(ref year) = filter.year {
        select = select.filter(Column::Year.eq(year.as_str()));
    }
    if let Some(ref semester) = filter.semester {
        select = select.filter(Column::Semester.eq(semester.as_str()));
    }
    select
}

impl SeaOrmStorage {
    /// 去重后的科目名称（按字母序）
    pub async fn list_subject_titles_impl(
        &self,
        year: Option<String>,
    ) -> Result<Vec<SubjectTitleItem>> {
        let mut select = StudentResults::find()
            .select_only()
            .column(Column::SubjectTitle)
            .distinct()
            .filter(Column::SubjectTitle.is_not_null());

        if let Some(year) = year.filter(|y| !y.is_empty()) {
            select = select.filter(Column::Year.eq(year));
        }

        let titles = select
            .order_by_asc(Column::SubjectTitle)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(titles
            .into_iter()
            .map(|subject_title| SubjectTitleItem { subject_title })
            .collect())
    }

    /// 单科排名
    pub async fn list_subject_standings_impl(
        &self,
        subject_title: &str,
        filter: ResultFilter,
    ) -> Result<Vec<SubjectStanding>> {
        let select = StudentResults::find().filter(Column::SubjectTitle.eq(subject_title));

        let rows = apply_filter(select, &filter)
            .order_by_desc(Column::Total)
            .all(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("查询单科成绩失败: {e}")))?;

        Ok(rank_subject_standings(
            rows.into_iter().map(MarkRow::from).collect(),
        ))
    }

    /// 仪表盘：仅统计含科目信息的行
    pub async fn list_dashboard_impl(&self, filter: ResultFilter) -> Result<Vec<DashboardRow>> {
        let select = StudentResults::find().filter(Column::SubjectCode.is_not_null());

        let rows = apply_filter(select, &filter)
            .order_by_asc(Column::Regno)
            .all(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("查询仪表盘数据失败: {e}")))?;

        Ok(summarize_dashboard(
            rows.into_iter().map(MarkRow::from).collect(),
        ))
    }
}
