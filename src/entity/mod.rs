pub mod student_results;
