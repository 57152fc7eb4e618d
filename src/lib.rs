pub mod console;
pub mod entry;
pub mod grading;
pub mod output;
pub mod session;
