pub mod results;
pub mod students;
pub mod subjects;
pub mod system;
pub mod uploads;

pub use results::ResultService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use system::SystemService;
pub use uploads::UploadService;
