pub mod local_dashboard;
pub mod matching;
