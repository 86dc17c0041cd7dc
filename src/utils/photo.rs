//! 学生照片文件名与访问路径

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// 照片对外访问前缀
pub const PHOTO_PUBLIC_PATH: &str = "/uploads";

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// 由学生姓名生成文件名前缀：小写，空白替换为下划线，去掉路径相关字符
pub fn sanitize_name_prefix(student_name: Option<&str>) -> String {
    let lowered = student_name.unwrap_or_default().to_lowercase();
    let underscored = WHITESPACE_RE.replace_all(&lowered, "_");
    let cleaned: String = underscored
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        "student".to_string()
    } else {
        cleaned
    }
}

/// 原始文件名的扩展名（含点号，保留大小写），没有扩展名时为空
pub fn original_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// 存储文件名：`{姓名前缀}_{毫秒时间戳}{扩展名}`
///
/// 同名学生在同一毫秒内上传会产生相同文件名，这里不做额外处理。
pub fn photo_file_name(student_name: Option<&str>, timestamp_millis: i64, extension: &str) -> String {
    format!(
        "{}_{}{}",
        sanitize_name_prefix(student_name),
        timestamp_millis,
        extension
    )
}

/// 请求的文件名只能是上传目录下的单个文件
pub fn is_safe_file_name(file_name: &str) -> bool {
    !file_name.is_empty()
        && !file_name.contains('/')
        && !file_name.contains('\\')
        && !file_name.contains("..")
}

/// 获取图片的 MIME 类型
pub fn get_mime_type(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
