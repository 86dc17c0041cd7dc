use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 仪表盘行：每个学生一行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct DashboardRow {
    pub regno: String,
    pub name: String,
    pub year: Option<String>,
    pub photo: String,
    /// 不及格科目数
    pub arrears: i64,
    /// 各科绩点平均值，保留两位小数
    pub cgpa: f64,
}

/// 单科排名行
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct SubjectStanding {
    pub regno: String,
    pub name: String,
    pub year: Option<String>,
    pub photo: String,
    pub marks: Option<f64>,
    /// 从 1 开始的顺序名次，同分不并列
    pub position: i64,
    pub gpa: u8,
}
