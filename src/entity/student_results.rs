//! 成绩记录实体
//!
//! 单表反范式设计：学生档案字段在该学生的每一行科目记录中重复保存，
//! `subject_code` 为空的行是仅含档案信息的种子行。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub regno: String,
    pub name: String,
    pub department: Option<String>,
    pub year: Option<String>,
    pub photo: Option<String>,
    pub semester: Option<String>,
    pub subject_code: Option<String>,
    pub subject_title: Option<String>,
    pub ia: Option<f64>,
    pub ea: Option<f64>,
    pub total: Option<f64>,
    pub result: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student_result(self) -> crate::models::results::entities::StudentResult {
        use crate::models::results::entities::{StudentResult, SubjectOutcome};

        StudentResult {
            id: self.id,
            regno: self.regno,
            name: self.name,
            department: self.department,
            year: self.year,
            photo: self.photo.unwrap_or_default(),
            semester: self.semester,
            subject_code: self.subject_code,
            subject_title: self.subject_title,
            ia: self.ia,
            ea: self.ea,
            total: self.total,
            result: self.result.and_then(|r| r.parse::<SubjectOutcome>().ok()),
        }
    }
}
