//! 学生档案存储操作
//!
//! 档案字段在每行科目记录中重复保存，更新与删除都以学号为单位批量作用于所有行。

use super::SeaOrmStorage;
use crate::entity::student_results::{ActiveModel, Column, Entity as StudentResults};
use crate::errors::{ResultBoardError, Result};
use crate::models::{
    results::entities::StudentResult,
    students::{
        entities::StudentSummary,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

#[derive(Debug, FromQueryResult)]
struct StudentSummaryRow {
    id: i64,
    regno: String,
    name: String,
    year: Option<String>,
    department: Option<String>,
    photo: Option<String>,
}

impl SeaOrmStorage {
    /// 学生列表：每个 (regno, name, year, department) 一行
    pub async fn list_students_impl(&self) -> Result<Vec<StudentSummary>> {
        let rows = StudentResults::find()
            .select_only()
            .column_as(Column::Id.min(), "id")
            .column(Column::Regno)
            .column(Column::Name)
            .column(Column::Year)
            .column(Column::Department)
            .column_as(Expr::cust("MAX(COALESCE(photo, ''))"), "photo")
            .group_by(Column::Regno)
            .group_by(Column::Name)
            .group_by(Column::Year)
            .group_by(Column::Department)
            .order_by_asc(Column::Regno)
            .into_model::<StudentSummaryRow>()
            .all(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|row| StudentSummary {
                id: row.id,
                regno: row.regno,
                name: row.name,
                year: row.year,
                department: row.department,
                photo: row.photo.unwrap_or_default(),
            })
            .collect())
    }

    /// 新建学生：插入一条不含科目信息的档案种子行
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<StudentResult> {
        let regno = req
            .regno
            .ok_or_else(|| ResultBoardError::validation("regno is required"))?;
        let name = req
            .name
            .ok_or_else(|| ResultBoardError::validation("name is required"))?;

        let model = ActiveModel {
            regno: Set(regno),
            name: Set(name),
            department: Set(req.department),
            year: Set(req.year),
            photo: Set(Some(req.photo)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student_result())
    }

    /// 通过行 ID 解析学号
    pub async fn find_regno_by_id_impl(&self, id: i64) -> Result<Option<String>> {
        let regno = StudentResults::find_by_id(id)
            .select_only()
            .column(Column::Regno)
            .into_tuple::<String>()
            .one(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("查询学号失败: {e}")))?;

        Ok(regno)
    }

    /// 按原学号批量更新档案字段
    ///
    /// 单条 UPDATE 语句；与解析学号的查询之间不在同一事务中。
    pub async fn update_students_by_regno_impl(
        &self,
        old_regno: &str,
        update: UpdateStudentRequest,
    ) -> Result<u64> {
        let mut statement = StudentResults::update_many()
            .col_expr(Column::Regno, Expr::value(update.regno))
            .col_expr(Column::Name, Expr::value(update.name))
            .col_expr(Column::Department, Expr::value(update.department))
            .col_expr(Column::Year, Expr::value(update.year));

        if let Some(photo) = update.photo {
            statement = statement.col_expr(Column::Photo, Expr::value(photo));
        }

        let result = statement
            .filter(Column::Regno.eq(old_regno))
            .exec(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("更新学生档案失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 删除学号下的全部行（档案行与所有科目）
    pub async fn delete_results_by_regno_impl(&self, regno: &str) -> Result<u64> {
        let result = StudentResults::delete_many()
            .filter(Column::Regno.eq(regno))
            .exec(&self.db)
            .await
            .map_err(|e| ResultBoardError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected)
    }
}
