pub mod common;
pub mod results;
pub mod students;
pub mod subjects;
pub mod system;

pub use common::{ApiResponse, ErrorCode};
pub use system::AppStartTime;
