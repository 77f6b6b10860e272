pub mod analyze;
pub mod charts;
pub mod companies;
pub mod dashboard;
pub mod init;
