//! 绩点换算与聚合
//!
//! 排名与 CGPA 在每次请求中对已查询出的行做一次显式遍历得到，
//! 不依赖数据库会话变量，因此连接池中的连接之间不存在共享状态。

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::entities::SubjectOutcome;
use super::responses::{DashboardRow, SubjectStanding};

/// 参与聚合的一行成绩（存储层投影）
#[derive(Debug, Clone, PartialEq)]
pub struct MarkRow {
    pub regno: String,
    pub name: String,
    pub year: Option<String>,
    pub photo: Option<String>,
    pub total: Option<f64>,
    pub result: Option<String>,
}

/// 总分到绩点的分段映射
pub fn grade_point(total: f64) -> u8 {
    if total >= 90.0 {
        10
    } else if total >= 80.0 {
        9
    } else if total >= 70.0 {
        8
    } else if total >= 60.0 {
        7
    } else if total >= 50.0 {
        6
    } else {
        0
    }
}

/// 四舍五入到两位小数
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 组内照片取值：MAX(COALESCE(photo, ''))
fn merge_photo(current: &mut String, candidate: Option<&str>) {
    let candidate = candidate.unwrap_or_default();
    if candidate > current.as_str() {
        *current = candidate.to_string();
    }
}

// 总分降序，NULL 排最后
fn cmp_total_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 单科排名
///
/// 先按 (regno, name, year, total) 分组，再按总分降序编号。
/// 同一学生若有两行该科目记录且四个字段恰好相同，会被合并为一条排名记录。
pub fn rank_subject_standings(rows: Vec<MarkRow>) -> Vec<SubjectStanding> {
    let mut rows = rows;
    rows.sort_by(|a, b| {
        a.regno
            .cmp(&b.regno)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.year.cmp(&b.year))
            .then_with(|| cmp_total_desc(a.total, b.total))
    });

    let mut groups: Vec<SubjectStanding> = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(last) = groups.last_mut()
            && last.regno == row.regno
            && last.name == row.name
            && last.year == row.year
            && last.marks == row.total
        {
            merge_photo(&mut last.photo, row.photo.as_deref());
            continue;
        }

        let mut photo = String::new();
        merge_photo(&mut photo, row.photo.as_deref());
        groups.push(SubjectStanding {
            gpa: row.total.map(grade_point).unwrap_or(0),
            regno: row.regno,
            name: row.name,
            year: row.year,
            photo,
            marks: row.total,
            position: 0,
        });
    }

    // 同分时按学号稳定排序，名次严格递增
    groups.sort_by(|a, b| cmp_total_desc(a.marks, b.marks).then_with(|| a.regno.cmp(&b.regno)));
    for (index, standing) in groups.iter_mut().enumerate() {
        standing.position = index as i64 + 1;
    }

    groups
}

#[derive(Default)]
struct DashboardAccumulator {
    photo: String,
    arrears: i64,
    grade_points: u32,
    subjects: u32,
}

/// 仪表盘汇总：按 (regno, name, year) 分组计算挂科数与 CGPA，按学号升序输出
///
/// 调用方只应传入含科目信息的行，档案种子行不参与统计。
pub fn summarize_dashboard(rows: Vec<MarkRow>) -> Vec<DashboardRow> {
    let mut groups: BTreeMap<(String, String, Option<String>), DashboardAccumulator> =
        BTreeMap::new();

    for row in rows {
        let acc = groups
            .entry((row.regno, row.name, row.year))
            .or_default();
        merge_photo(&mut acc.photo, row.photo.as_deref());
        if row.result.as_deref() == Some(SubjectOutcome::FAIL) {
            acc.arrears += 1;
        }
        acc.grade_points += u32::from(row.total.map(grade_point).unwrap_or(0));
        acc.subjects += 1;
    }

    groups
        .into_iter()
        .map(|((regno, name, year), acc)| DashboardRow {
            regno,
            name,
            year,
            photo: acc.photo,
            arrears: acc.arrears,
            cgpa: round_to_hundredths(f64::from(acc.grade_points) / f64::from(acc.subjects.max(1))),
        })
        .collect()
}
