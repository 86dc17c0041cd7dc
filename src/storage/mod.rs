use std::sync::Arc;

use crate::models::{
    results::{
        entities::StudentResult,
        requests::{CreateResultRequest, ResultFilter, UpdateMarksRequest},
        responses::{DashboardRow, SubjectStanding},
    },
    students::{
        entities::StudentSummary,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    subjects::SubjectTitleItem,
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 科目与聚合查询
    // 去重后的科目名称，可按年级过滤
    async fn list_subject_titles(&self, year: Option<String>) -> Result<Vec<SubjectTitleItem>>;
    // 单科排名
    async fn list_subject_standings(
        &self,
        subject_title: &str,
        filter: ResultFilter,
    ) -> Result<Vec<SubjectStanding>>;
    // 学生仪表盘（挂科数 + CGPA）
    async fn list_dashboard(&self, filter: ResultFilter) -> Result<Vec<DashboardRow>>;

    /// 科目成绩方法
    // 列出学生的所有科目记录
    async fn list_student_subjects(&self, regno: &str) -> Result<Vec<StudentResult>>;
    // 添加科目成绩（自动沿用该学号已有照片）
    async fn create_result(&self, req: CreateResultRequest) -> Result<StudentResult>;
    // 更新单行分数
    async fn update_marks(&self, id: i64, req: UpdateMarksRequest) -> Result<bool>;
    // 删除单行科目记录
    async fn delete_result(&self, id: i64) -> Result<bool>;

    /// 学生档案方法
    // 学生列表
    async fn list_students(&self) -> Result<Vec<StudentSummary>>;
    // 新建学生档案种子行
    async fn create_student(&self, req: CreateStudentRequest) -> Result<StudentResult>;
    // 通过行 ID 解析学号
    async fn find_regno_by_id(&self, id: i64) -> Result<Option<String>>;
    // 按原学号批量更新档案字段，返回受影响行数
    async fn update_students_by_regno(
        &self,
        old_regno: &str,
        update: UpdateStudentRequest,
    ) -> Result<u64>;
    // 删除学号下的所有行，返回受影响行数
    async fn delete_results_by_regno(&self, regno: &str) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
