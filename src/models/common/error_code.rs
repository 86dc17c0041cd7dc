/// API 错误码
///
/// `ApiResponse.code` 字段使用这些值，0 表示成功。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    InternalServerError = 1005,

    // 成绩记录
    ResultCreationFailed = 2000,
    ResultUpdateFailed = 2001,
    ResultDeleteFailed = 2002,
    ResultNotFound = 2004,

    // 学生档案
    StudentCreationFailed = 3000,
    StudentUpdateFailed = 3001,
    StudentDeleteFailed = 3002,
    StudentNotFound = 3004,

    // 照片上传
    FileUploadFailed = 4000,
    FileTypeNotAllowed = 4001,
    FileSizeExceeded = 4002,
    MultifileUploadNotAllowed = 4003,
    FileNotFound = 4004,
}
