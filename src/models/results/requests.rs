use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::numeric::{deserialize_lenient_string, deserialize_marks, non_empty};

/// 成绩查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultListParams {
    pub year: Option<String>,
    pub semester: Option<String>,
    pub subject: Option<String>,
}

/// 存储层使用的过滤条件，空字符串已归一为 None
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFilter {
    pub year: Option<String>,
    pub semester: Option<String>,
}

impl ResultListParams {
    /// 拆分为科目名与过滤条件
    pub fn into_parts(self) -> (Option<String>, ResultFilter) {
        (
            non_empty(self.subject),
            ResultFilter {
                year: non_empty(self.year),
                semester: non_empty(self.semester),
            },
        )
    }
}

/// 添加科目成绩请求
///
/// `total` / `result` 不接受客户端传入，由服务端根据 ia + ea 计算。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct CreateResultRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub regno: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub semester: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub subject_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub subject_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_marks")]
    pub ia: f64,
    #[serde(default, deserialize_with = "deserialize_marks")]
    pub ea: f64,
}

/// 更新分数请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct UpdateMarksRequest {
    #[serde(default, deserialize_with = "deserialize_marks")]
    pub ia: f64,
    #[serde(default, deserialize_with = "deserialize_marks")]
    pub ea: f64,
}
