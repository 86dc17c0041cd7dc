use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生列表项：每个 (regno, name, year, department) 组合一行
///
/// `id` 为该组最小的行 ID，作为学生更新/删除接口的句柄。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentSummary {
    pub id: i64,
    pub regno: String,
    pub name: String,
    pub year: Option<String>,
    pub department: Option<String>,
    pub photo: String,
}
