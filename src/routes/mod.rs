pub mod results;

pub mod students;

pub mod subjects;

pub mod system;

pub mod uploads;

pub use results::configure_result_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use system::configure_system_routes;
pub use uploads::configure_upload_routes;
