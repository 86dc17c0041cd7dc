/// 新建学生（插入一条档案种子行）
#[derive(Debug, Clone, Default)]
pub struct CreateStudentRequest {
    pub regno: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    /// 已保存的照片文件名，未上传时为空字符串
    pub photo: String,
}

/// 更新学生档案，作用于原学号下的所有行
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentRequest {
    pub regno: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub year: Option<String>,
    /// 仅在重新上传照片时覆盖
    pub photo: Option<String>,
}
