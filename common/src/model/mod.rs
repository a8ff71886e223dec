pub mod job;
pub mod local;
pub mod matching;
pub mod resume;
