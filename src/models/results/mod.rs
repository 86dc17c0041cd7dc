pub mod entities;
pub mod grading;
pub mod requests;
pub mod responses;
