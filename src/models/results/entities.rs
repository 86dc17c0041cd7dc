use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 及格线（含）
pub const PASS_MARK: f64 = 50.0;

// 科目结果
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub enum SubjectOutcome {
    Pass,
    Fail,
}

impl SubjectOutcome {
    pub const PASS: &'static str = "PASS";
    pub const FAIL: &'static str = "FAIL";

    /// 由总分推导结果，total >= 50 为 PASS
    pub fn from_total(total: f64) -> Self {
        if total >= PASS_MARK {
            SubjectOutcome::Pass
        } else {
            SubjectOutcome::Fail
        }
    }
}

impl std::fmt::Display for SubjectOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectOutcome::Pass => write!(f, "{}", SubjectOutcome::PASS),
            SubjectOutcome::Fail => write!(f, "{}", SubjectOutcome::FAIL),
        }
    }
}

impl std::str::FromStr for SubjectOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SubjectOutcome::PASS => Ok(SubjectOutcome::Pass),
            SubjectOutcome::FAIL => Ok(SubjectOutcome::Fail),
            _ => Err(format!("Invalid subject outcome: {s}")),
        }
    }
}

/// 由 IA/EA 计算出的派生字段，每次写入都重新计算
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMarks {
    pub ia: f64,
    pub ea: f64,
    pub total: f64,
    pub result: SubjectOutcome,
}

impl DerivedMarks {
    pub fn compute(ia: f64, ea: f64) -> Self {
        let total = ia + ea;
        Self {
            ia,
            ea,
            total,
            result: SubjectOutcome::from_total(total),
        }
    }
}

// 成绩记录（表中一行）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct StudentResult {
    pub id: i64,
    pub regno: String,
    pub name: String,
    pub department: Option<String>,
    pub year: Option<String>,
    pub photo: String,
    pub semester: Option<String>,
    pub subject_code: Option<String>,
    pub subject_title: Option<String>,
    pub ia: Option<f64>,
    pub ea: Option<f64>,
    pub total: Option<f64>,
    pub result: Option<SubjectOutcome>,
}
