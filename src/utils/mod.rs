pub mod extractor;
pub mod file_magic;
pub mod parameter_error_handler;
pub mod photo;

pub use extractor::{SafeIDI64, SafeRegno};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
