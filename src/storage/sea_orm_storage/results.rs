//! 科目成绩存储操作

use super::SeaOrmStorage;
use crate::entity::student_results::{Column, Entity as StudentResults, Model};
use crate::errors::{ResultBoardError, Result};
use crate::models::results::{
    entities::{DerivedMarks, StudentResult},
    requests::{CreateResultRequest, UpdateMarksRequest},
};
use sea_orm::sea_query::{Expr, InsertStatement, Query};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
};

/// 构造添加科目用的单条 `INSERT … SELECT`
///
/// 不带 GROUP BY 的 MAX 总会返回一行，学号首次出现时 photo 为 NULL。
fn insert_result_statement(
    regno: &str,
    name: &str,
    req: &CreateResultRequest,
    marks: &DerivedMarks,
) -> Result<InsertStatement> {
    let select = Query::select()
        .exprs([
            Expr::val(regno),
            Expr::val(name),
            Expr::val(req.department.clone()),
            Expr::val(req.year.clone()),
            Expr::val(req.semester.clone()),
            Expr::val(req.subject_code.clone()),
            Expr::val(req.subject_title.clone()),
            Expr::val(marks.ia),
            Expr::val(marks.ea),
            Expr::val(marks.total),
            Expr::val(marks.result.to_string()),
            Column::Photo.max(),
        ])
        .from(StudentResults)
        .and_where(Column::Regno.eq(regno))
        .to_owned();

    let insert = Query::insert()
        .into_table(StudentResults)
        .columns([
            Column::Regno,
            Column::Name,
            Column::Department,
            Column::Year,
            Column::Semester,
            Column::SubjectCode,
            Column::SubjectTitle,
            Column::Ia,
            Column::Ea,
            Column::Total,
            Column::Result,
            Column::Photo,
        ])
        .select_from(select)
        .map_err(|e| ResultBoardError::database_operation(format!("构造插入语句失败: {e}")))?
        .to_owned();

    Ok(insert)
}

impl SeaOrmStorage {
    /// 学生的科目记录（不含档案种子行），按学期、科目代码排序
    pub async fn list_student_subjects_impl(&self, regno: &str) -> Result<Vec<StudentResult>> {
        let rows = StudentResults::find()
            .filter(Column::Regno.eq(regno))
            .filter(Column::SubjectCode.is_not_null())
            .order_by_asc(Column::Semester)
            .order_by_asc(Column::SubjectCode)
            .all(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("查询学生科目失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_student_result()).collect())
    }

    /// 添加科目成绩
    ///
    /// total / result 在此处重新计算，照片在同一条语句里取同学号已有行的 MAX(photo)。
    pub async fn create_result_impl(&self, req: CreateResultRequest) -> Result<StudentResult> {
        let regno = req
            .regno
            .clone()
            .ok_or_else(|| ResultBoardError::validation("regno is required"))?;
        let name = req
            .name
            .clone()
            .ok_or_else(|| ResultBoardError::validation("name is required"))?;

        let marks = DerivedMarks::compute(req.ia, req.ea);
        let mut insert = insert_result_statement(&regno, &name, &req, &marks)?;

        // MySQL 没有 RETURNING，按自增 ID 回读
        let model = if self.db.get_database_backend() == DbBackend::MySql {
            let id = self
                .db
                .execute(&insert)
                .await
                .map_err(|e| ResultBoardError::database_operation(format!("添加科目成绩失败: {e}")))?
                .last_insert_id();

            StudentResults::find_by_id(id as i64)
                .one(&self.db)
                .await
                .map_err(|e| ResultBoardError::database_operation(format!("读取新增科目失败: {e}")))?
        } else {
            insert.returning_all();
            let row = self
                .db
                .query_one(&insert)
                .await
                .map_err(|e| ResultBoardError::database_operation(format!("添加科目成绩失败: {e}")))?;

            row.map(|row| Model::from_query_result(&row, ""))
                .transpose()
                .map_err(|e| ResultBoardError::database_operation(format!("解析新增科目失败: {e}")))?
        };

        model
            .map(Model::into_student_result)
            .ok_or_else(|| ResultBoardError::database_operation("添加科目成绩后未返回记录"))
    }

    /// 更新单行分数，同时重算 total / result
    pub async fn update_marks_impl(&self, id: i64, req: UpdateMarksRequest) -> Result<bool> {
        let marks = DerivedMarks::compute(req.ia, req.ea);

        let result = StudentResults::update_many()
            .col_expr(Column::Ia, Expr::value(marks.ia))
            .col_expr(Column::Ea, Expr::value(marks.ea))
            .col_expr(Column::Total, Expr::value(marks.total))
            .col_expr(Column::Result, Expr::value(marks.result.to_string()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("更新分数失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除单行科目记录
    pub async fn delete_result_impl(&self, id: i64) -> Result<bool> {
        let result = StudentResults::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
